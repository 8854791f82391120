use crate::models::Event;

/// Fixed offset added to the check-in ratio.
pub const RETENTION_BASELINE: f64 = 0.2;

/// `0.2 + checked_in / max(1, volunteers)`, totals summed over all events.
///
/// Returns 0 for an empty collection and whenever the expression is not a
/// finite number.
pub fn retention_rate(events: &[Event]) -> f64 {
    if events.is_empty() {
        return 0.0;
    }

    let checked_in: usize = events.iter().map(|e| e.checked_in().count()).sum();
    let volunteers: usize = events.iter().map(|e| e.volunteers.len()).sum();

    let rate = RETENTION_BASELINE + checked_in as f64 / volunteers.max(1) as f64;
    if rate.is_finite() { rate } else { 0.0 }
}
