use crate::{TickContext, WorldMut};

/// Health of an active record, polled once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordStatus {
    /// Still making progress; keep polling.
    Valid,
    /// Preconditions no longer hold or the record timed out; the plan it
    /// belongs to must be abandoned and rebuilt.
    Invalid,
    /// The record's real-world effect has been achieved.
    Completed,
}

/// Runtime counterpart of a planned action step.
///
/// A record is bound to one agent and one accepted plan step. All real-world
/// effects happen here; the planning-time action that produced it is pure.
///
/// Contract:
/// - `activate` is called exactly once before any `check_status` poll.
/// - `deactivate` is called exactly once per activation, and implementations
///   must tolerate a spurious call without a prior `activate` (no-op).
/// - `check_status` reads live world state only; it never mutates anything.
pub trait ActionRecord<W>: 'static
where
    W: WorldMut + 'static,
{
    fn activate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W);

    fn deactivate(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W);

    fn check_status(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> RecordStatus;
}

/// Owns the single active record of one agent.
///
/// Enforces the one-active-record invariant: installing a new record releases
/// the previous one first, and `deactivate_current` is idempotent, so external
/// cancellation at any tick boundary is always safe.
pub struct RecordRuntime<W>
where
    W: WorldMut + 'static,
{
    current: Option<Box<dyn ActionRecord<W>>>,
}

impl<W> RecordRuntime<W>
where
    W: WorldMut + 'static,
{
    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    /// Activate `record`, releasing any previously active record first.
    pub fn activate(
        &mut self,
        mut record: Box<dyn ActionRecord<W>>,
        ctx: &TickContext,
        agent: W::Agent,
        world: &mut W,
    ) {
        self.deactivate_current(ctx, agent, world);
        record.activate(ctx, agent, world);
        self.current = Some(record);
    }

    /// Release the active record, if any. Safe to call repeatedly.
    pub fn deactivate_current(&mut self, ctx: &TickContext, agent: W::Agent, world: &mut W) {
        if let Some(mut record) = self.current.take() {
            record.deactivate(ctx, agent, world);
        }
    }

    /// Poll the active record. `None` when no record is active.
    pub fn status(&self, ctx: &TickContext, agent: W::Agent, world: &W) -> Option<RecordStatus> {
        self.current
            .as_ref()
            .map(|record| record.check_status(ctx, agent, world))
    }
}

impl<W> Default for RecordRuntime<W>
where
    W: WorldMut + 'static,
{
    fn default() -> Self {
        Self { current: None }
    }
}
