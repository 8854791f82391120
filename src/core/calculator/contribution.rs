use crate::models::Volunteer;

/// Width of a volunteer's contribution bar: 20% base plus 20% per score point.
pub fn contribution_percent(volunteer: &Volunteer) -> f64 {
    let score = if volunteer.score.is_finite() { volunteer.score } else { 0.0 };
    20.0 + score * 20.0
}
