use serde::Serialize;

/// Volunteer counts for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    pub volunteer_count: usize,
    pub checked_in_count: usize,
}

/// Organization-wide aggregates shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub event_count: usize,
    pub average_hours: f64,
    pub average_rating: f64,
    pub retention_rate: f64,
    pub efficiency_score: u8,
    pub pending_approvals: usize,
}

/// One row of the contribution chart of the analytics view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    pub volunteer_id: String,
    pub name: String,
    pub percent: f64,
}

/// Post-event analytics for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAnalytics {
    pub event_id: String,
    pub title: String,
    pub snapshot: EventSnapshot,
    pub average_rating: Option<f64>,
    pub contributions: Vec<Contribution>,
}
