//! Canonical event collection and its mutations.
//!
//! Events are kept most-recent-first. Nothing is ever removed: volunteers,
//! tasks and feedback are appended to their event in arrival order.

use crate::core::outcome::{Miss, Outcome};
use crate::models::{ApprovalStatus, Event, Feedback, Task, Volunteer, VolunteerStatus};
use crate::utils::ids;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from events already in display order (head = most recent).
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn list_events(&self) -> &[Event] {
        &self.events
    }

    pub fn get_event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_event(id).is_some()
    }

    /// Case-insensitive substring match on the title; an empty query matches all.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let needle = query.to_lowercase();
        self.events
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn pending_approvals(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.approval_status.is_pending())
            .collect()
    }

    /// Create a pending event at the head of the collection.
    ///
    /// `hours` falls back to 2 when absent or not positive. Title, date and
    /// venue are taken as-is.
    pub fn create_event(
        &mut self,
        title: &str,
        date: &str,
        venue: &str,
        hours: Option<f64>,
    ) -> &Event {
        let id = ids::generate("evt", |candidate| self.contains(candidate));
        let event = Event::new(id, title, date, venue, hours);
        debug!(id = %event.id, hours = event.hours, "event created");

        self.events.insert(0, event);
        &self.events[0]
    }

    /// Explicit lookup used by every mutator.
    fn event_mut(&mut self, event_id: &str) -> Outcome<&mut Event> {
        match self.events.iter_mut().find(|e| e.id == event_id) {
            Some(ev) => Outcome::Applied(ev),
            None => {
                debug!(event_id, "event not found, mutation skipped");
                Outcome::Missed(Miss::Event(event_id.to_string()))
            }
        }
    }

    pub fn add_volunteer(&mut self, event_id: &str, volunteer: Volunteer) -> Outcome<()> {
        self.event_mut(event_id).map(|ev| {
            debug!(event_id, volunteer = %volunteer.id, "volunteer added");
            ev.volunteers.push(volunteer);
        })
    }

    pub fn assign_task(&mut self, event_id: &str, task: Task) -> Outcome<()> {
        self.event_mut(event_id).map(|ev| {
            debug!(event_id, task = %task.id, "task assigned");
            ev.tasks.push(task);
        })
    }

    /// Flip a volunteer between `checked-in` and `assigned`.
    ///
    /// `signed-up` and `assigned` both move to `checked-in`; undoing always
    /// lands on `assigned`. Returns the new status.
    pub fn toggle_check_in(
        &mut self,
        event_id: &str,
        volunteer_id: &str,
    ) -> Outcome<VolunteerStatus> {
        let ev = match self.event_mut(event_id) {
            Outcome::Applied(ev) => ev,
            Outcome::Missed(m) => return Outcome::Missed(m),
        };

        match ev.volunteer_mut(volunteer_id) {
            Some(v) => {
                v.status = v.status.toggled();
                debug!(event_id, volunteer_id, status = %v.status, "check-in toggled");
                Outcome::Applied(v.status)
            }
            None => {
                debug!(event_id, volunteer_id, "volunteer not found, toggle skipped");
                Outcome::Missed(Miss::Volunteer {
                    event: event_id.to_string(),
                    volunteer: volunteer_id.to_string(),
                })
            }
        }
    }

    /// Unconditional overwrite; any status may follow any other.
    /// Returns the previous status.
    pub fn set_approval_status(
        &mut self,
        event_id: &str,
        status: ApprovalStatus,
    ) -> Outcome<ApprovalStatus> {
        self.event_mut(event_id).map(|ev| {
            let previous = ev.approval_status;
            ev.approval_status = status;
            debug!(event_id, from = %previous, to = %status, "approval status set");
            previous
        })
    }

    pub fn raise_approval(&mut self, event_id: &str) -> Outcome<ApprovalStatus> {
        self.set_approval_status(event_id, ApprovalStatus::Pending)
    }

    pub fn approve_event(&mut self, event_id: &str) -> Outcome<ApprovalStatus> {
        self.set_approval_status(event_id, ApprovalStatus::Approved)
    }

    pub fn reject_event(&mut self, event_id: &str) -> Outcome<ApprovalStatus> {
        self.set_approval_status(event_id, ApprovalStatus::Rejected)
    }

    /// Append feedback; the rating is not range-checked here.
    pub fn submit_feedback(&mut self, event_id: &str, feedback: Feedback) -> Outcome<()> {
        self.event_mut(event_id).map(|ev| {
            debug!(event_id, feedback = %feedback.id, rating = feedback.rating, "feedback submitted");
            ev.feedback.push(feedback);
        })
    }
}
