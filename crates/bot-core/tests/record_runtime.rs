use bot_core::{ActionRecord, RecordRuntime, RecordStatus, TickContext, WorldMut, WorldView};

#[derive(Default)]
struct CounterWorld {
    activated: Vec<&'static str>,
    deactivated: Vec<&'static str>,
}

impl WorldView for CounterWorld {
    type Agent = u64;
}

impl WorldMut for CounterWorld {}

struct CountingRecord {
    name: &'static str,
    status: RecordStatus,
    active: bool,
}

impl CountingRecord {
    fn new(name: &'static str, status: RecordStatus) -> Self {
        Self {
            name,
            status,
            active: false,
        }
    }
}

impl ActionRecord<CounterWorld> for CountingRecord {
    fn activate(&mut self, _ctx: &TickContext, _agent: u64, world: &mut CounterWorld) {
        self.active = true;
        world.activated.push(self.name);
    }

    fn deactivate(&mut self, _ctx: &TickContext, _agent: u64, world: &mut CounterWorld) {
        if !self.active {
            return;
        }
        self.active = false;
        world.deactivated.push(self.name);
    }

    fn check_status(&self, _ctx: &TickContext, _agent: u64, _world: &CounterWorld) -> RecordStatus {
        self.status
    }
}

fn ctx() -> TickContext {
    TickContext::new(0, 0, 0.05)
}

#[test]
fn activating_a_second_record_releases_the_first() {
    let mut world = CounterWorld::default();
    let mut runtime = RecordRuntime::default();
    let ctx = ctx();

    runtime.activate(
        Box::new(CountingRecord::new("first", RecordStatus::Valid)),
        &ctx,
        1,
        &mut world,
    );
    assert!(runtime.is_active());
    assert_eq!(world.activated, vec!["first"]);

    runtime.activate(
        Box::new(CountingRecord::new("second", RecordStatus::Valid)),
        &ctx,
        1,
        &mut world,
    );

    // The first record must be deactivated before the second activates.
    assert_eq!(world.deactivated, vec!["first"]);
    assert_eq!(world.activated, vec!["first", "second"]);
    assert_eq!(
        runtime.status(&ctx, 1, &world),
        Some(RecordStatus::Valid)
    );
}

#[test]
fn deactivate_current_is_idempotent() {
    let mut world = CounterWorld::default();
    let mut runtime = RecordRuntime::default();
    let ctx = ctx();

    // Deactivating with nothing active is a no-op.
    runtime.deactivate_current(&ctx, 1, &mut world);
    assert!(world.deactivated.is_empty());

    runtime.activate(
        Box::new(CountingRecord::new("only", RecordStatus::Completed)),
        &ctx,
        1,
        &mut world,
    );
    runtime.deactivate_current(&ctx, 1, &mut world);
    runtime.deactivate_current(&ctx, 1, &mut world);

    assert_eq!(world.deactivated, vec!["only"]);
    assert!(!runtime.is_active());
    assert_eq!(runtime.status(&ctx, 1, &world), None);
}
