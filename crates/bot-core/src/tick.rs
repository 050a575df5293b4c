/// Per-tick simulation context threaded into every planning and execution
/// call.
///
/// `now_millis` is the monotonic simulation clock. Record deadlines and travel
/// costs are expressed against it, never against wall time, so replays stay
/// deterministic regardless of frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickContext {
    pub tick: u64,
    pub now_millis: u64,
    pub dt_seconds: f32,
}

impl TickContext {
    pub const fn new(tick: u64, now_millis: u64, dt_seconds: f32) -> Self {
        Self {
            tick,
            now_millis,
            dt_seconds,
        }
    }
}
