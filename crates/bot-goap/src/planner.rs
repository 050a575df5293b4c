use core::cmp::Ordering;
use std::collections::BinaryHeap;

use bot_core::{PlanSpec, TickContext, WorldView};
use tracing::debug;

use crate::{Goal, NodeId, NodePool, PlannerNode, PlanningAction, WorldState};

/// Search budgets. Every planning pass must finish within one tick's time
/// slice, so all three bounds (expansions, depth, and the pool capacity) are
/// hard limits; hitting any of them fails the pass instead of running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    pub max_expansions: usize,
    pub max_depth: u32,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_expansions: 256,
            max_depth: 8,
        }
    }
}

/// Best-first search over hypothetical world states.
///
/// From the agent's current state, every registered action is asked to
/// propose a transition; the cheapest path whose terminal state satisfies the
/// goal wins. Failure (no path within budget) is reported as `None` — the
/// caller falls back to a default behavior, nothing is thrown.
pub struct Planner<W, S>
where
    W: WorldView + 'static,
{
    actions: Vec<Box<dyn PlanningAction<W, S>>>,
    config: PlannerConfig,
}

impl<W, S> Planner<W, S>
where
    W: WorldView + 'static,
    S: Clone + 'static,
{
    pub fn new(actions: Vec<Box<dyn PlanningAction<W, S>>>) -> Self {
        Self {
            actions,
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> PlannerConfig {
        self.config
    }

    pub fn action_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.actions.iter().map(|action| action.name())
    }

    pub fn plan(
        &self,
        ctx: &TickContext,
        agent: W::Agent,
        world: &W,
        start: &WorldState,
        goal: &Goal,
        pool: &mut NodePool<S>,
    ) -> Option<PlanSpec<S>> {
        pool.reset();

        if goal.is_satisfied_by(start) {
            return Some(PlanSpec::new(vec![]));
        }

        #[derive(Debug, PartialEq, Eq)]
        struct OpenNode {
            f: u32,
            g: u32,
            node: NodeId,
            tie: u64,
        }

        impl OpenNode {
            fn key(&self) -> (u32, u32, u32, u64) {
                (self.f, self.g, self.node.raw(), self.tie)
            }
        }

        impl Ord for OpenNode {
            fn cmp(&self, other: &Self) -> Ordering {
                // Reverse ordering to make BinaryHeap behave like a min-heap.
                other.key().cmp(&self.key())
            }
        }

        impl PartialOrd for OpenNode {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        // Admissible heuristic: an unsatisfied goal needs at least one more
        // action, and every action costs at least 1 ms. Counting unsatisfied
        // variables instead would overestimate whenever a single action
        // satisfies several of them.
        let h = |state: &WorldState| -> u32 { state.unsatisfied_vars(goal.target()).min(1) };

        let root = pool.acquire(PlannerNode {
            state: *start,
            cost_millis: 0,
            depth: 0,
            parent: None,
            spec: None,
        })?;

        let mut open = BinaryHeap::<OpenNode>::new();
        let mut tie: u64 = 0;

        open.push(OpenNode {
            f: h(start),
            g: 0,
            node: root,
            tie,
        });
        tie += 1;

        let mut expansions: usize = 0;

        while let Some(current) = open.pop() {
            expansions += 1;
            if expansions > self.config.max_expansions {
                debug!(
                    goal = goal.name(),
                    max_expansions = self.config.max_expansions,
                    "planning pass exceeded its expansion budget"
                );
                return None;
            }

            let state = pool.get(current.node).state;
            let depth = pool.get(current.node).depth;

            if goal.is_satisfied_by(&state) {
                return Some(reconstruct(pool, current.node));
            }

            // A congruent state reached cheaper elsewhere makes this entry
            // stale.
            if pool.iter().any(|(id, node)| {
                id != current.node
                    && node.cost_millis < current.g
                    && node.state.congruent(&state)
            }) {
                continue;
            }

            if depth >= self.config.max_depth {
                continue;
            }

            for action in &self.actions {
                let Some(proposal) = action.try_apply(ctx, agent, world, &state) else {
                    continue;
                };

                if proposal.state.congruent(&state) {
                    // No progress; skip to keep the search finite.
                    continue;
                }

                let next_g = current.g.saturating_add(proposal.cost_millis.max(1));
                if pool
                    .iter()
                    .any(|(_, node)| node.cost_millis <= next_g && node.state.congruent(&proposal.state))
                {
                    continue;
                }

                let Some(child) = pool.acquire(PlannerNode {
                    state: proposal.state,
                    cost_millis: next_g,
                    depth: depth + 1,
                    parent: Some(current.node),
                    spec: Some(proposal.spec),
                }) else {
                    debug!(
                        goal = goal.name(),
                        capacity = pool.capacity(),
                        "planner node pool exhausted, aborting pass"
                    );
                    return None;
                };

                open.push(OpenNode {
                    f: next_g.saturating_add(h(&proposal.state)),
                    g: next_g,
                    node: child,
                    tie,
                });
                tie += 1;
            }
        }

        debug!(goal = goal.name(), "no action sequence reaches the goal");
        None
    }
}

fn reconstruct<S: Clone>(pool: &NodePool<S>, terminal: NodeId) -> PlanSpec<S> {
    let mut steps: Vec<S> = Vec::new();
    let mut current = Some(terminal);
    while let Some(id) = current {
        let node = pool.get(id);
        if let Some(spec) = node.spec.clone() {
            steps.push(spec);
        }
        current = node.parent;
    }
    steps.reverse();
    PlanSpec::new(steps)
}
