use bot_actions::{BotActionSpec, DodgeToSpotAction, Hazard};
use bot_core::{TickContext, Vec3, WorldView};
use bot_goap::{PlanningAction, WorldState};
use bot_nav::{NavWorldView, StraightLineEstimator, TravelEstimator};

struct DodgeWorld {
    origin: Vec3,
    reachable: bool,
    estimator: StraightLineEstimator,
}

impl DodgeWorld {
    fn new(origin: Vec3) -> Self {
        Self {
            origin,
            reachable: true,
            estimator: StraightLineEstimator::new(100.0),
        }
    }
}

impl WorldView for DodgeWorld {
    type Agent = u64;
}

impl TravelEstimator for DodgeWorld {
    fn travel_time_millis(&self, from: Vec3, to: Vec3) -> u32 {
        if self.reachable {
            self.estimator.travel_time_millis(from, to)
        } else {
            0
        }
    }
}

impl NavWorldView for DodgeWorld {
    fn origin(&self, _agent: u64) -> Option<Vec3> {
        Some(self.origin)
    }

    fn travel(&self) -> &dyn TravelEstimator {
        self
    }
}

const SPOT: Vec3 = Vec3::new(40.0, 0.0, 0.0);

fn hazard() -> Hazard {
    Hazard {
        hit_point: Vec3::new(0.0, 10.0, 0.0),
        direction: Vec3::new(0.0, -1.0, 0.0),
        damage: 50.0,
    }
}

fn ready_state(origin: Vec3) -> WorldState {
    let mut state = WorldState::default();
    state.bot_origin_mut().set_value(origin);
    hazard().write_to(&mut state);
    state.dodge_hazard_spot_mut().set_value(SPOT);
    state
}

fn ctx() -> TickContext {
    TickContext::new(0, 0, 0.05)
}

#[test]
fn proposes_a_dodge_costed_by_travel_time() {
    let world = DodgeWorld::new(Vec3::ZERO);
    let state = ready_state(Vec3::ZERO);
    let before = state;

    let proposal = DodgeToSpotAction
        .try_apply(&ctx(), 1, &world, &state)
        .expect("proposal");

    // 40 units at 100 units/second.
    assert_eq!(proposal.cost_millis, 400);
    assert_eq!(proposal.spec, BotActionSpec::DodgeToSpot { spot: SPOT });

    let next = proposal.state;
    assert_eq!(next.bot_origin().value(), SPOT);
    assert!(!next.bot_origin().is_ignored());
    // The chosen spot stays in the state; only the hazard facts are cleared.
    assert!(!next.dodge_hazard_spot().is_ignored());
    assert_eq!(next.dodge_hazard_spot().value(), SPOT);
    assert!(next.hazard_hit_point().is_ignored());
    assert!(next.hazard_direction().is_ignored());
    assert!(next.potential_hazard_damage().is_ignored());
    assert!(next.has_reacted_to_hazard().value());

    // The input state is untouched.
    assert_eq!(state, before);
}

#[test]
fn declines_when_the_spot_is_unreachable() {
    let mut world = DodgeWorld::new(Vec3::ZERO);
    world.reachable = false;
    let state = ready_state(Vec3::ZERO);

    assert!(DodgeToSpotAction.try_apply(&ctx(), 1, &world, &state).is_none());
}

#[test]
fn declines_without_a_damage_estimate() {
    let world = DodgeWorld::new(Vec3::ZERO);
    let mut state = ready_state(Vec3::ZERO);
    state.potential_hazard_damage_mut().set_ignored(true);

    assert!(DodgeToSpotAction.try_apply(&ctx(), 1, &world, &state).is_none());
}

#[test]
fn declines_without_a_selected_spot() {
    let world = DodgeWorld::new(Vec3::ZERO);
    let mut state = ready_state(Vec3::ZERO);
    state.dodge_hazard_spot_mut().set_ignored(true);

    assert!(DodgeToSpotAction.try_apply(&ctx(), 1, &world, &state).is_none());
}

#[test]
fn declines_once_the_hazard_is_reacted_to() {
    let world = DodgeWorld::new(Vec3::ZERO);
    let mut state = ready_state(Vec3::ZERO);
    state.has_reacted_to_hazard_mut().set_value(true);

    assert!(DodgeToSpotAction.try_apply(&ctx(), 1, &world, &state).is_none());
}

#[test]
fn declines_from_a_hypothetical_origin() {
    let world = DodgeWorld::new(Vec3::ZERO);
    // The searched state has the agent somewhere it is not.
    let state = ready_state(Vec3::new(100.0, 0.0, 0.0));

    assert!(DodgeToSpotAction.try_apply(&ctx(), 1, &world, &state).is_none());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "hazard damage is set without hit point or direction")]
fn damage_without_geometry_is_a_contract_violation() {
    let world = DodgeWorld::new(Vec3::ZERO);
    let mut state = WorldState::default();
    state.bot_origin_mut().set_value(Vec3::ZERO);
    state.potential_hazard_damage_mut().set_value(50.0);
    state.dodge_hazard_spot_mut().set_value(SPOT);

    let _ = DodgeToSpotAction.try_apply(&ctx(), 1, &world, &state);
}
