use super::{
    approval_status::ApprovalStatus, feedback::Feedback, task::Task, volunteer::Volunteer,
};
use serde::{Deserialize, Serialize};

/// Planned duration used when an event is created without a positive `hours`.
pub const DEFAULT_HOURS: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: String,
    pub venue: String,
    pub hours: f64,
    #[serde(default)]
    pub approval_status: ApprovalStatus,
    #[serde(default)]
    pub volunteers: Vec<Volunteer>, // signup order
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub feedback: Vec<Feedback>, // submission order
}

impl Event {
    /// Costruttore per eventi nuovi:
    /// - `approval_status = pending`
    /// - `hours` ricade su 2 se assente, zero, negativo o non finito
    /// - collezioni vuote
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: impl Into<String>,
        venue: impl Into<String>,
        hours: Option<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: date.into(),
            venue: venue.into(),
            hours: effective_hours(hours),
            approval_status: ApprovalStatus::Pending,
            volunteers: Vec::new(),
            tasks: Vec::new(),
            feedback: Vec::new(),
        }
    }

    pub fn volunteer(&self, volunteer_id: &str) -> Option<&Volunteer> {
        self.volunteers.iter().find(|v| v.id == volunteer_id)
    }

    pub fn volunteer_mut(&mut self, volunteer_id: &str) -> Option<&mut Volunteer> {
        self.volunteers.iter_mut().find(|v| v.id == volunteer_id)
    }

    pub fn checked_in(&self) -> impl Iterator<Item = &Volunteer> {
        self.volunteers.iter().filter(|v| v.status.is_checked_in())
    }

    pub fn rating_sum(&self) -> u32 {
        self.feedback.iter().map(|f| u32::from(f.rating)).sum()
    }
}

pub fn effective_hours(hours: Option<f64>) -> f64 {
    match hours {
        Some(h) if h.is_finite() && h > 0.0 => h,
        _ => DEFAULT_HOURS,
    }
}
