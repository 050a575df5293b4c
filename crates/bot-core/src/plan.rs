use crate::{ActionRecord, TickContext, WorldMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Serializable plan data: a sequence of record specs.
///
/// Planners output `PlanSpec<Spec>`; the executor turns each spec into a
/// runtime `ActionRecord` lazily, one step at a time. This keeps the search
/// side pure data and confines world mutation to the execution side.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSpec<S> {
    pub steps: Vec<S>,
}

impl<S> PlanSpec<S> {
    pub fn new(steps: Vec<S>) -> Self {
        Self { steps }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Build runtime records from immutable, serializable specs.
pub trait RecordFactory<W>: 'static
where
    W: WorldMut + 'static,
{
    type Spec: Clone + 'static;

    fn build(
        &self,
        spec: &Self::Spec,
        ctx: &TickContext,
        agent: W::Agent,
        world: &W,
    ) -> Box<dyn ActionRecord<W>>;
}
