use bot_actions::{default_planner, BotActionSpec, Hazard};
use bot_core::{TickContext, Vec3, WorldView};
use bot_goap::{Goal, NodePool, WorldState};
use bot_nav::{NavWorldView, StraightLineEstimator, TravelEstimator};

struct PlanWorld {
    origin: Vec3,
    estimator: StraightLineEstimator,
}

impl WorldView for PlanWorld {
    type Agent = u64;
}

impl NavWorldView for PlanWorld {
    fn origin(&self, _agent: u64) -> Option<Vec3> {
        Some(self.origin)
    }

    fn travel(&self) -> &dyn TravelEstimator {
        &self.estimator
    }
}

const SPOT: Vec3 = Vec3::new(40.0, 0.0, 0.0);
const WAYPOINT: Vec3 = Vec3::new(200.0, 0.0, 0.0);

fn world() -> PlanWorld {
    PlanWorld {
        origin: Vec3::ZERO,
        estimator: StraightLineEstimator::new(100.0),
    }
}

fn threatened_state() -> WorldState {
    let mut state = WorldState::default();
    state.bot_origin_mut().set_value(Vec3::ZERO);
    state.has_reacted_to_hazard_mut().set_value(false);
    Hazard {
        hit_point: Vec3::new(0.0, 10.0, 0.0),
        direction: Vec3::new(0.0, -1.0, 0.0),
        damage: 50.0,
    }
    .write_to(&mut state);
    state.dodge_hazard_spot_mut().set_value(SPOT);
    state
}

fn ctx() -> TickContext {
    TickContext::new(0, 0, 0.05)
}

#[test]
fn a_threatened_agent_plans_a_single_dodge() {
    let planner = default_planner::<PlanWorld>();
    let mut pool = NodePool::with_capacity(64);

    let mut target = WorldState::default();
    target.has_reacted_to_hazard_mut().set_value(true);
    let goal = Goal::new("dodge_hazard", 10, target);

    let plan = planner
        .plan(&ctx(), 1, &world(), &threatened_state(), &goal, &mut pool)
        .expect("plan");

    assert_eq!(plan.steps, vec![BotActionSpec::DodgeToSpot { spot: SPOT }]);
}

#[test]
fn dodge_chains_into_travel_toward_the_nav_target() {
    let planner = default_planner::<PlanWorld>();
    let mut pool = NodePool::with_capacity(64);

    let mut start = threatened_state();
    start.nav_target_origin_mut().set_value(WAYPOINT);

    // React to the hazard, then get back on route.
    let mut target = WorldState::default();
    target.has_reacted_to_hazard_mut().set_value(true);
    target.bot_origin_mut().set_value(WAYPOINT);
    let goal = Goal::new("react_then_travel", 10, target);

    let plan = planner
        .plan(&ctx(), 1, &world(), &start, &goal, &mut pool)
        .expect("plan");

    assert_eq!(
        plan.steps,
        vec![
            BotActionSpec::DodgeToSpot { spot: SPOT },
            BotActionSpec::RunToNavTarget {
                target: WAYPOINT,
                // From the dodge spot, not from the live origin.
                travel_time_millis: 1600,
            },
        ]
    );
}

#[test]
fn no_plan_exists_without_a_reaction_path() {
    let planner = default_planner::<PlanWorld>();
    let mut pool = NodePool::with_capacity(64);

    let mut start = threatened_state();
    start.dodge_hazard_spot_mut().set_ignored(true);

    let mut target = WorldState::default();
    target.has_reacted_to_hazard_mut().set_value(true);
    let goal = Goal::new("dodge_hazard", 10, target);

    assert!(planner
        .plan(&ctx(), 1, &world(), &start, &goal, &mut pool)
        .is_none());
}
