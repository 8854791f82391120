use serde::{Deserialize, Serialize};

/// Position of a volunteer on the live-view map, in percent of the container.
/// Values are nominally 0–100 but never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    pub x: f64,
    pub y: f64,
}

/// Coordinate used by the live view when a point is unset (zero).
pub const FALLBACK_COORD: f64 = 10.0;

impl Location {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates as drawn on the map: a zero axis falls back to 10%.
    pub fn display_point(&self) -> (f64, f64) {
        let fix = |v: f64| if v == 0.0 || !v.is_finite() { FALLBACK_COORD } else { v };
        (fix(self.x), fix(self.y))
    }
}
