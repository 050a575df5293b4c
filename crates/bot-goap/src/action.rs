use bot_core::{TickContext, WorldView};

use crate::WorldState;

/// A successor state proposed by a planning action.
#[derive(Debug, Clone)]
pub struct Proposal<S> {
    /// The transition result: an independent copy, never a view into the
    /// input state.
    pub state: WorldState,
    /// Transition cost in milliseconds.
    pub cost_millis: u32,
    /// Spec from which the runtime record is built if this edge ends up on
    /// the accepted plan.
    pub spec: S,
}

/// A pure transition rule offered to the planner.
///
/// `try_apply` either proposes a successor or declines with `None`. Declining
/// is normal search pruning, not an error; implementations log declines at
/// debug verbosity at most. No side effects happen here — real-world effects
/// belong to the record built from the proposal's spec.
pub trait PlanningAction<W, S>: 'static
where
    W: WorldView,
{
    fn name(&self) -> &'static str;

    fn try_apply(
        &self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &W,
        state: &WorldState,
    ) -> Option<Proposal<S>>;
}
