use crate::core::calculator::{
    average_hours, average_rating, contribution_percent, efficiency_score,
    event_average_rating, per_event_snapshot, retention_rate,
};
use crate::models::Event;
use crate::models::dashboard::{Contribution, DashboardSummary, EventAnalytics};

pub struct Core;

impl Core {
    pub fn build_dashboard(events: &[Event]) -> DashboardSummary {
        DashboardSummary {
            event_count: events.len(),
            average_hours: average_hours(events),
            average_rating: average_rating(events),
            retention_rate: retention_rate(events),
            efficiency_score: efficiency_score(events),
            pending_approvals: events
                .iter()
                .filter(|e| e.approval_status.is_pending())
                .count(),
        }
    }

    pub fn build_event_analytics(event: &Event) -> EventAnalytics {
        let contributions = event
            .volunteers
            .iter()
            .map(|v| Contribution {
                volunteer_id: v.id.clone(),
                name: v.name.clone(),
                percent: contribution_percent(v),
            })
            .collect();

        EventAnalytics {
            event_id: event.id.clone(),
            title: event.title.clone(),
            snapshot: per_event_snapshot(event),
            average_rating: event_average_rating(event),
            contributions,
        }
    }
}
