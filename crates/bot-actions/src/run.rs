use bot_core::{ActionRecord, RecordStatus, TickContext, Vec3};
use bot_goap::{PlanningAction, Proposal, WorldState};
use bot_nav::{NavWorldMut, NavWorldView};
use tracing::debug;

use crate::spec::BotActionSpec;

/// Squared arrival radius for ordinary travel. Looser than the dodge radius:
/// reaching the general area is enough when nothing is shooting at the spot.
pub const RUN_ARRIVAL_SQUARE_DISTANCE: f32 = 32.0 * 32.0;

/// Deadline slack: a run record is given this multiple of its estimated
/// travel time before it is considered stuck.
const RUN_TIMEOUT_SLACK: u64 = 3;

/// Travel to the current navigation target.
///
/// Unlike the dodge, this chains from hypothetical states: the origin used
/// for costing is the one in the searched state, so the planner can sequence
/// it after other movement.
pub struct RunToNavTargetAction;

impl RunToNavTargetAction {
    pub const NAME: &'static str = "run_to_nav_target";
}

impl<W> PlanningAction<W, BotActionSpec> for RunToNavTargetAction
where
    W: NavWorldView + 'static,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn try_apply(
        &self,
        _ctx: &TickContext,
        _agent: W::Agent,
        world: &W,
        state: &WorldState,
    ) -> Option<Proposal<BotActionSpec>> {
        if state.nav_target_origin().is_ignored() {
            debug!(action = Self::NAME, "no nav target is set");
            return None;
        }
        if state.bot_origin().is_ignored() {
            debug!(action = Self::NAME, "state has no origin to travel from");
            return None;
        }

        let origin = state.bot_origin().value();
        let target = state.nav_target_origin().value();
        if origin.distance_squared(target) < RUN_ARRIVAL_SQUARE_DISTANCE {
            debug!(action = Self::NAME, "already at the nav target");
            return None;
        }

        let travel_millis = world.travel().travel_time_millis(origin, target);
        if travel_millis == 0 {
            debug!(action = Self::NAME, "nav target is unreachable");
            return None;
        }

        let mut next = *state;
        next.bot_origin_mut().set_value(target);

        Some(Proposal {
            state: next,
            cost_millis: travel_millis,
            spec: BotActionSpec::RunToNavTarget {
                target,
                travel_time_millis: travel_millis,
            },
        })
    }
}

/// Runtime half of [`RunToNavTargetAction`].
pub struct RunToNavTargetRecord {
    target: Vec3,
    travel_time_millis: u32,
    deadline: u64,
    active: bool,
}

impl RunToNavTargetRecord {
    pub fn new(target: Vec3, travel_time_millis: u32) -> Self {
        Self {
            target,
            travel_time_millis,
            deadline: 0,
            active: false,
        }
    }
}

impl<W> ActionRecord<W> for RunToNavTargetRecord
where
    W: NavWorldMut + 'static,
{
    fn activate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        self.active = true;
        self.deadline = ctx
            .now_millis
            .saturating_add(u64::from(self.travel_time_millis) * RUN_TIMEOUT_SLACK);
        world.set_nav_target(agent, self.target);
    }

    fn deactivate(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        if !self.active {
            return;
        }
        self.active = false;
        world.reset_nav_target(agent);
    }

    fn check_status(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> RecordStatus {
        let Some(origin) = world.origin(agent) else {
            return RecordStatus::Invalid;
        };
        if origin.distance_squared(self.target) < RUN_ARRIVAL_SQUARE_DISTANCE {
            return RecordStatus::Completed;
        }
        if ctx.now_millis >= self.deadline {
            return RecordStatus::Invalid;
        }
        RecordStatus::Valid
    }
}
