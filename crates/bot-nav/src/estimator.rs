use bot_core::Vec3;

/// Opaque travel-time oracle.
///
/// Returns the estimated travel time in milliseconds, or `0` when the
/// destination is unreachable. Planning code never interprets the estimate
/// beyond "cost" and "reachable"; how it is computed is a backend concern.
pub trait TravelEstimator {
    fn travel_time_millis(&self, from: Vec3, to: Vec3) -> u32;
}

/// Straight-line estimate at a constant ground speed.
///
/// Useful for tests and for open worlds without obstructions. A reachable
/// query never returns `0`: zero is reserved for "unreachable".
#[derive(Debug, Clone, Copy)]
pub struct StraightLineEstimator {
    speed_ups: f32,
}

impl StraightLineEstimator {
    /// `speed_ups` is in world units per second and must be positive.
    pub fn new(speed_ups: f32) -> Self {
        assert!(speed_ups > 0.0, "speed must be positive");
        Self { speed_ups }
    }
}

impl TravelEstimator for StraightLineEstimator {
    fn travel_time_millis(&self, from: Vec3, to: Vec3) -> u32 {
        let millis = from.distance(to) / self.speed_ups * 1000.0;
        (millis.ceil() as u32).max(1)
    }
}
