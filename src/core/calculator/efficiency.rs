use super::{average_hours, average_rating, retention_rate};
use crate::models::Event;

/// Rating assumed when no usable average exists.
pub const DEFAULT_RATING: f64 = 3.0;
const MULTIPLIER: f64 = 3.0;

/// Composite organizer score in `[0, 100]`:
///
/// `round(clamp(0, 100, n × max(1, avg_hours) × (rating / 5) × (1 + retention) × 3))`
///
/// where `rating` is the average rating, or 3 when that is zero or not finite.
pub fn efficiency_score(events: &[Event]) -> u8 {
    let n = events.len() as f64;
    let hours = average_hours(events).max(1.0);

    let rating = match average_rating(events) {
        r if r == 0.0 || !r.is_finite() => DEFAULT_RATING,
        r => r,
    };

    let raw = n * hours * (rating / 5.0) * (1.0 + retention_rate(events)) * MULTIPLIER;
    clamp_round(raw)
}

/// Clamp into `[0, 100]` then round half up. NaN maps to 0.
fn clamp_round(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    let clamped = raw.clamp(0.0, 100.0);
    (clamped + 0.5).floor() as u8
}
