use bot_core::Vec3;
use bot_goap::WorldState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A detected threat the agent should move away from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hazard {
    /// Predicted impact point.
    pub hit_point: Vec3,
    /// Unit direction the threat travels in.
    pub direction: Vec3,
    /// Damage estimate if the agent stays put.
    pub damage: f32,
}

impl Hazard {
    /// How long a reaction record stays valid once activated. Hazards are
    /// short-lived; a dodge that has not finished inside this window is
    /// reacting to something that no longer exists.
    pub const REACTION_TIMEOUT_MILLIS: u64 = 400;

    /// Project this hazard into the planning variables. The hit point,
    /// direction, and damage estimate are always written together.
    pub fn write_to(&self, state: &mut WorldState) {
        state.hazard_hit_point_mut().set_value(self.hit_point);
        state.hazard_direction_mut().set_value(self.direction);
        state.potential_hazard_damage_mut().set_value(self.damage);
    }
}
