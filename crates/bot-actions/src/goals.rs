use bot_core::Vec3;
use bot_goap::{Goal, WorldState};

/// Goal: the currently observed hazard has been reacted to.
pub fn dodge_hazard_goal(priority: u32) -> Goal {
    let mut target = WorldState::default();
    target.has_reacted_to_hazard_mut().set_value(true);
    Goal::new("dodge_hazard", priority, target)
}

/// Goal: the agent stands at `target`.
pub fn reach_nav_target_goal(priority: u32, target: Vec3) -> Goal {
    let mut state = WorldState::default();
    state.bot_origin_mut().set_value(target);
    Goal::new("reach_nav_target", priority, state)
}
