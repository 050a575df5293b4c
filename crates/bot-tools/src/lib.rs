//! Tooling primitives for deterministic agent planning.
//!
//! This crate is intentionally lightweight and engine-agnostic. Higher-level
//! integrations (debug drawing, inspectors, ...) should live in dedicated
//! adapter crates.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, SharedTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};
