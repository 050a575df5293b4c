//! Concrete hazard-reaction behaviors built on the planning stack.
//!
//! Each behavior comes in two halves: a pure [`bot_goap::PlanningAction`]
//! the planner searches with, and an [`bot_core::ActionRecord`] the executor
//! drives against the live world. [`spec::BotActionSpec`] is the serializable
//! bridge between them.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod dodge;
pub mod goals;
pub mod hazard;
pub mod run;
pub mod spec;

pub use dodge::{DodgeToSpotAction, DodgeToSpotRecord, DODGE_COMPLETION_SQUARE_DISTANCE};
pub use goals::{dodge_hazard_goal, reach_nav_target_goal};
pub use hazard::Hazard;
pub use run::{RunToNavTargetAction, RunToNavTargetRecord, RUN_ARRIVAL_SQUARE_DISTANCE};
pub use spec::{default_planner, BotActionSpec, BotRecordFactory};
