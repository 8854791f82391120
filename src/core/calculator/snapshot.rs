use crate::models::Event;
use crate::models::dashboard::EventSnapshot;

pub fn per_event_snapshot(event: &Event) -> EventSnapshot {
    EventSnapshot {
        volunteer_count: event.volunteers.len(),
        checked_in_count: event.checked_in().count(),
    }
}
