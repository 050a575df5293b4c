use crate::WorldState;

/// A desired outcome: a partial [`WorldState`] (its non-ignored variables are
/// the requirements) plus a priority for ranking competing goals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    name: &'static str,
    priority: u32,
    target: WorldState,
}

impl Goal {
    pub fn new(name: &'static str, priority: u32, target: WorldState) -> Self {
        Self {
            name,
            priority,
            target,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn target(&self) -> &WorldState {
        &self.target
    }

    pub fn is_satisfied_by(&self, state: &WorldState) -> bool {
        state.satisfies(&self.target)
    }
}

/// Pick the highest-priority goal not already satisfied by `current`.
///
/// Ties break by name (ascending) so the choice is deterministic regardless
/// of registration order.
pub fn select_goal<'a>(goals: &'a [Goal], current: &WorldState) -> Option<&'a Goal> {
    goals
        .iter()
        .filter(|goal| !goal.is_satisfied_by(current))
        .max_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| b.name.cmp(a.name))
        })
}
