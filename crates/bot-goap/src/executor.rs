use bot_core::{PlanSpec, RecordFactory, RecordRuntime, RecordStatus, TickContext, WorldMut};
use bot_tools::{TraceEvent, TraceSink};

/// Outcome of one executor tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStatus {
    /// A record is active and still valid.
    Running,
    /// Every step of the plan has completed.
    Completed,
    /// The active record reported `Invalid`; the plan is dead and the caller
    /// must replan.
    Invalidated,
}

/// Steps through an accepted plan one record at a time.
///
/// Each step's spec is turned into a runtime record lazily via the factory,
/// activated through the shared [`RecordRuntime`], and polled every tick.
/// Completion advances to the next step (possibly several in one tick when
/// records complete instantly); invalidation tears the record down and
/// reports it upward.
pub struct PlanExecutor<W, F>
where
    W: WorldMut + 'static,
    F: RecordFactory<W>,
{
    plan: PlanSpec<F::Spec>,
    factory: F,
    index: usize,
}

impl<W, F> PlanExecutor<W, F>
where
    W: WorldMut + 'static,
    F: RecordFactory<W>,
{
    pub fn new(plan: PlanSpec<F::Spec>, factory: F) -> Self {
        Self {
            plan,
            factory,
            index: 0,
        }
    }

    pub fn plan(&self) -> &PlanSpec<F::Spec> {
        &self.plan
    }

    pub fn len(&self) -> usize {
        self.plan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn tick(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        records: &mut RecordRuntime<W>,
        sink: &mut dyn TraceSink,
    ) -> ExecStatus {
        loop {
            if self.index >= self.plan.len() {
                return ExecStatus::Completed;
            }

            if !records.is_active() {
                let spec = &self.plan.steps[self.index];
                let record = self.factory.build(spec, ctx, agent, &*world);
                records.activate(record, ctx, agent, world);
                sink.emit(TraceEvent::new(ctx.tick, "record.activate").with_a(self.index as u64));
            }

            match records.status(ctx, agent, world) {
                Some(RecordStatus::Completed) => {
                    records.deactivate_current(ctx, agent, world);
                    sink.emit(
                        TraceEvent::new(ctx.tick, "record.completed").with_a(self.index as u64),
                    );
                    self.index += 1;
                }
                Some(RecordStatus::Invalid) => {
                    records.deactivate_current(ctx, agent, world);
                    sink.emit(
                        TraceEvent::new(ctx.tick, "record.invalid").with_a(self.index as u64),
                    );
                    return ExecStatus::Invalidated;
                }
                Some(RecordStatus::Valid) | None => return ExecStatus::Running,
            }
        }
    }

    /// External, synchronous cancellation: release whatever record is active.
    pub fn cancel(
        &mut self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
        records: &mut RecordRuntime<W>,
    ) {
        records.deactivate_current(ctx, agent, world);
    }
}
