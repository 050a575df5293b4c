use bot_core::{ActionRecord, RecordStatus, TickContext, Vec3};
use bot_goap::{PlanningAction, Proposal, WorldState, MAX_ROUNDING_SQUARE_DISTANCE_ERROR};
use bot_nav::{NavWorldMut, NavWorldView, TacticalHint};
use tracing::debug;

use crate::hazard::Hazard;
use crate::spec::BotActionSpec;

/// Squared distance at which a dodge counts as arrived. Strictly-below
/// comparison: sitting exactly on the rim is not done.
pub const DODGE_COMPLETION_SQUARE_DISTANCE: f32 = 16.0 * 16.0;

/// Sidestep to a precomputed safe spot in reaction to an incoming hazard.
///
/// Only applicable from the agent's live position: a dodge is an immediate
/// reaction, not something to schedule after other movement. Hypothetical
/// follow-up travel is [`crate::RunToNavTargetAction`]'s job.
pub struct DodgeToSpotAction;

impl DodgeToSpotAction {
    pub const NAME: &'static str = "dodge_to_spot";
}

impl<W> PlanningAction<W, BotActionSpec> for DodgeToSpotAction
where
    W: NavWorldView + 'static,
{
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn try_apply(
        &self,
        _ctx: &TickContext,
        agent: W::Agent,
        world: &W,
        state: &WorldState,
    ) -> Option<Proposal<BotActionSpec>> {
        if state.potential_hazard_damage().is_ignored() {
            debug!(action = Self::NAME, "no pending hazard damage");
            return None;
        }
        if state.hazard_hit_point().is_ignored() || state.hazard_direction().is_ignored() {
            // Whoever sets the damage estimate must set the geometry too.
            debug_assert!(false, "hazard damage is set without hit point or direction");
            return None;
        }
        if !state.has_reacted_to_hazard().is_ignored() && state.has_reacted_to_hazard().value() {
            debug!(action = Self::NAME, "hazard already reacted to");
            return None;
        }
        if state.dodge_hazard_spot().is_ignored() {
            debug!(action = Self::NAME, "no dodge spot has been selected");
            return None;
        }

        let live_origin = world.origin(agent)?;
        if state.bot_origin().is_ignored()
            || state.bot_origin().value().distance_squared(live_origin)
                > MAX_ROUNDING_SQUARE_DISTANCE_ERROR
        {
            debug!(action = Self::NAME, "state origin is not the live origin");
            return None;
        }

        let spot = state.dodge_hazard_spot().value();
        let travel_millis = world.travel().travel_time_millis(live_origin, spot);
        if travel_millis == 0 {
            debug!(action = Self::NAME, "dodge spot is unreachable");
            return None;
        }

        let mut next = *state;
        next.bot_origin_mut().set_value(spot);
        next.hazard_hit_point_mut().set_ignored(true);
        next.hazard_direction_mut().set_ignored(true);
        next.potential_hazard_damage_mut().set_ignored(true);
        next.has_reacted_to_hazard_mut().set_value(true);

        Some(Proposal {
            state: next,
            cost_millis: travel_millis,
            spec: BotActionSpec::DodgeToSpot { spot },
        })
    }
}

/// Runtime half of [`DodgeToSpotAction`]: steer to the spot, keep fighting
/// while doing so, and expire once the hazard window has passed.
pub struct DodgeToSpotRecord {
    spot: Vec3,
    timeout_at: u64,
    active: bool,
}

impl DodgeToSpotRecord {
    pub fn new(spot: Vec3) -> Self {
        Self {
            spot,
            timeout_at: 0,
            active: false,
        }
    }
}

impl<W> ActionRecord<W> for DodgeToSpotRecord
where
    W: NavWorldMut + 'static,
{
    fn activate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        self.active = true;
        self.timeout_at = ctx.now_millis.saturating_add(Hazard::REACTION_TIMEOUT_MILLIS);
        world.set_nav_target(agent, self.spot);
        // The dodge itself is the evasion; don't also run away.
        world.set_tactical_hint(agent, TacticalHint::PreferAttack);
    }

    fn deactivate(&mut self, _ctx: &TickContext, agent: W::Agent, world: &mut W) {
        if !self.active {
            return;
        }
        self.active = false;
        world.reset_nav_target(agent);
        world.set_tactical_hint(agent, TacticalHint::Balanced);
    }

    fn check_status(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> RecordStatus {
        let Some(origin) = world.origin(agent) else {
            return RecordStatus::Invalid;
        };
        if origin.distance_squared(self.spot) < DODGE_COMPLETION_SQUARE_DISTANCE {
            return RecordStatus::Completed;
        }
        if ctx.now_millis >= self.timeout_at {
            return RecordStatus::Invalid;
        }
        RecordStatus::Valid
    }
}
