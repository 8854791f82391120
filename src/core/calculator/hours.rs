use crate::models::Event;

/// Mean planned duration across all events, 0 when there are none.
/// A non-finite `hours` counts as 0.
pub fn average_hours(events: &[Event]) -> f64 {
    if events.is_empty() {
        return 0.0;
    }

    let total: f64 = events
        .iter()
        .map(|e| if e.hours.is_finite() { e.hours } else { 0.0 })
        .sum();

    total / events.len() as f64
}
