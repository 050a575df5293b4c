use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A small, allocation-friendly trace event.
///
/// Intentionally "dumb data": a tick, a tag, and two opaque payload words.
/// Planning code records these during simulation; tests and tooling interpret
/// them afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceEvent {
    pub tick: u64,
    pub tag: Cow<'static, str>,
    pub a: u64,
    pub b: u64,
}

impl TraceEvent {
    pub fn new(tick: u64, tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tick,
            tag: tag.into(),
            a: 0,
            b: 0,
        }
    }

    pub fn with_a(mut self, a: u64) -> Self {
        self.a = a;
        self
    }

    pub fn with_b(mut self, b: u64) -> Self {
        self.b = b;
        self
    }
}

/// Receiver for trace events.
///
/// The planning driver owns one sink; everything it and the executor do flows
/// through it. The default `NullTraceSink` makes tracing free when unused.
pub trait TraceSink {
    fn emit(&mut self, event: TraceEvent);
}

#[derive(Debug, Default)]
pub struct NullTraceSink;

impl TraceSink for NullTraceSink {
    fn emit(&mut self, _event: TraceEvent) {}
}

#[derive(Debug, Default)]
pub struct VecTraceSink {
    pub events: Vec<TraceEvent>,
}

impl TraceSink for VecTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// An ordered event log, suitable for snapshotting and serialization.
#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn push(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.events.iter().map(|event| event.tag.as_ref())
    }
}

/// A sink whose log outlives the component that owns the sink.
///
/// The simulation side moves the sink into a driver; the observing side keeps
/// the cloned handle and reads the log after ticking. Single-threaded by
/// design (`Rc`), matching the one-writer simulation model.
#[derive(Debug, Default, Clone)]
pub struct SharedTraceSink {
    log: Rc<RefCell<TraceLog>>,
}

impl SharedTraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log_handle(&self) -> Rc<RefCell<TraceLog>> {
        Rc::clone(&self.log)
    }
}

impl TraceSink for SharedTraceSink {
    fn emit(&mut self, event: TraceEvent) {
        self.log.borrow_mut().push(event);
    }
}
