use crate::models::Event;

/// Average feedback rating across all events combined.
///
/// The denominator counts at least 1 per event, so events without feedback
/// pull the average toward zero:
///
/// `sum(ratings) / sum(max(1, feedback_count))`
pub fn average_rating(events: &[Event]) -> f64 {
    if events.is_empty() {
        return 0.0;
    }

    let ratings: u64 = events.iter().map(|e| u64::from(e.rating_sum())).sum();
    let slots: usize = events.iter().map(|e| e.feedback.len().max(1)).sum();

    ratings as f64 / slots as f64
}

/// Plain mean of one event's ratings; `None` without feedback.
pub fn event_average_rating(event: &Event) -> Option<f64> {
    if event.feedback.is_empty() {
        return None;
    }
    Some(f64::from(event.rating_sum()) / event.feedback.len() as f64)
}
