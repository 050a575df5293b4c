//! Real-time goal-oriented action planning (GOAP).
//!
//! The planner searches the space of hypothetical [`WorldState`]s by asking
//! registered [`PlanningAction`]s to propose transitions, selects the
//! cheapest path that satisfies the active [`Goal`], and hands the resulting
//! step specs to an execution layer that activates, polls, and tears down one
//! runtime record at a time.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod action;
pub mod driver;
pub mod executor;
pub mod goal;
pub mod planner;
pub mod pool;
pub mod world_state;

pub use action::{PlanningAction, Proposal};
pub use driver::{DriveStatus, PlanDriver, PlanDriverConfig};
pub use executor::{ExecStatus, PlanExecutor};
pub use goal::{select_goal, Goal};
pub use planner::{Planner, PlannerConfig};
pub use pool::{NodeId, NodePool, PlannerNode};
pub use world_state::{
    BoolVar, DirVar, OriginVar, ScalarVar, WorldState, MAX_ROUNDING_SQUARE_DISTANCE_ERROR,
};
