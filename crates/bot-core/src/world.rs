use crate::AgentId;

/// Read-only world access.
///
/// The core crate does not prescribe which queries a world must expose;
/// specific subsystems (navigation, perception, ...) define extension traits
/// on top of this one.
pub trait WorldView {
    type Agent: AgentId;
}

/// Write access / effect sink.
///
/// Only executing records mutate the world; planning code sees `WorldView`
/// (or an extension of it) exclusively.
pub trait WorldMut: WorldView {}
