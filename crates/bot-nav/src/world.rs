use bot_core::{WorldMut, WorldView};

use crate::TravelEstimator;
use bot_core::Vec3;

/// Momentary combat posture requested of the movement/combat layer.
///
/// Planning records set this as a hint; the layer that consumes it decides how
/// strongly to honor it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TacticalHint {
    #[default]
    Balanced,
    /// Keep fighting rather than evading further (set while dodging, since the
    /// dodge itself already handles the evasion).
    PreferAttack,
    PreferRetreat,
}

/// Read access to the navigation-facing world state.
pub trait NavWorldView: WorldView {
    /// Live origin of the agent, or `None` if it is not currently embodied.
    fn origin(&self, agent: Self::Agent) -> Option<Vec3>;

    fn travel(&self) -> &dyn TravelEstimator;
}

/// Mutations the execution layer performs through the navigation boundary.
pub trait NavWorldMut: WorldMut + NavWorldView {
    fn set_nav_target(&mut self, agent: Self::Agent, target: Vec3);

    fn reset_nav_target(&mut self, agent: Self::Agent);

    fn set_tactical_hint(&mut self, agent: Self::Agent, hint: TacticalHint);
}
