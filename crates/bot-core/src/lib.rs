//! Deterministic, engine-agnostic kernel primitives for tick-driven agents.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod math;
pub mod plan;
pub mod record;
pub mod tick;
pub mod world;

pub use agent::AgentId;
pub use math::Vec3;
pub use plan::{PlanSpec, RecordFactory};
pub use record::{ActionRecord, RecordRuntime, RecordStatus};
pub use tick::TickContext;
pub use world::{WorldMut, WorldView};
