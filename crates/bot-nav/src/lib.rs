//! Navigation boundary for the planning stack.
//!
//! Planning treats pathfinding as an opaque travel-time oracle: the only
//! question it ever asks is "how many milliseconds from here to there, or is
//! it unreachable". Backends live behind [`TravelEstimator`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod estimator;
pub mod grid;
pub mod world;

pub use estimator::{StraightLineEstimator, TravelEstimator};
pub use grid::NavGrid;
pub use world::{NavWorldMut, NavWorldView, TacticalHint};
