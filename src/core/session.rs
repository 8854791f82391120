//! Explicit state container for one user session.
//!
//! The session owns the event store, the selected event and the activity
//! log. Handlers receive it by `&mut`; there is no global state.

use crate::core::activity::ActivityLog;
use crate::core::logic::Core;
use crate::core::outcome::{Miss, Outcome};
use crate::core::seed;
use crate::core::store::EventStore;
use crate::models::dashboard::DashboardSummary;
use crate::models::{
    ApprovalStatus, Event, EventTemplate, Feedback, Task, Volunteer, VolunteerStatus,
};
use crate::utils::ids;
use tracing::info;

#[derive(Debug, Default)]
pub struct Session {
    store: EventStore,
    selected: Option<String>,
    activity: ActivityLog,
}

impl Session {
    pub fn new(store: EventStore) -> Self {
        let selected = store.list_events().first().map(|e| e.id.clone());
        Self {
            store,
            selected,
            activity: ActivityLog::new(),
        }
    }

    /// Session preloaded with the demo events.
    pub fn seeded() -> Self {
        let session = Self::new(EventStore::from_events(seed::demo_events()));
        info!(events = session.store.len(), "session started with demo data");
        session
    }

    pub fn empty() -> Self {
        info!("session started empty");
        Self::default()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected.as_deref().and_then(|id| self.store.get_event(id))
    }

    pub fn select(&mut self, event_id: &str) -> Outcome<()> {
        if self.store.contains(event_id) {
            self.selected = Some(event_id.to_string());
            Outcome::Applied(())
        } else {
            Outcome::Missed(Miss::Event(event_id.to_string()))
        }
    }

    pub fn dashboard(&self) -> DashboardSummary {
        Core::build_dashboard(self.store.list_events())
    }

    /// Create an event, optionally from a template, and select it.
    ///
    /// With a template, an empty title becomes the template title and one
    /// unassigned `todo` task is added per template role.
    pub fn create_event(
        &mut self,
        title: &str,
        date: &str,
        venue: &str,
        hours: Option<f64>,
        template: Option<EventTemplate>,
    ) -> Event {
        let title = match template {
            Some(t) if title.trim().is_empty() => t.title(),
            _ => title,
        };

        let id = self.store.create_event(title, date, venue, hours).id.clone();

        if let Some(t) = template {
            for role in t.roles() {
                let task_id = self.next_task_id(&id);
                let _ = self.store.assign_task(&id, Task::new(task_id, *role, None));
            }
        }

        self.selected = Some(id.clone());
        self.activity
            .record("create", &id, format!("Created \"{}\" (pending approval)", title));

        // just inserted, lookup cannot miss
        self.store.list_events()[0].clone()
    }

    pub fn add_volunteer(&mut self, event_id: &str, volunteer: Volunteer) -> Outcome<()> {
        let name = volunteer.name.clone();
        let outcome = self.store.add_volunteer(event_id, volunteer);
        if outcome.is_applied() {
            let msg = format!("New volunteer {} signed up for \"{}\"", name, self.title_of(event_id));
            self.activity.record("volunteer", event_id, msg);
        }
        outcome
    }

    pub fn assign_task(&mut self, event_id: &str, task: Task) -> Outcome<()> {
        let title = task.title.clone();
        let outcome = self.store.assign_task(event_id, task);
        if outcome.is_applied() {
            self.activity
                .record("task", event_id, format!("Task \"{}\" added", title));
        }
        outcome
    }

    pub fn toggle_check_in(&mut self, event_id: &str, volunteer_id: &str) -> Outcome<VolunteerStatus> {
        let outcome = self.store.toggle_check_in(event_id, volunteer_id);
        if let Outcome::Applied(status) = &outcome {
            let verb = if status.is_checked_in() { "checked in" } else { "check-in undone" };
            self.activity
                .record("checkin", event_id, format!("Volunteer {} {}", volunteer_id, verb));
        }
        outcome
    }

    /// Returns the previous status.
    pub fn set_approval_status(
        &mut self,
        event_id: &str,
        status: ApprovalStatus,
    ) -> Outcome<ApprovalStatus> {
        let outcome = self.store.set_approval_status(event_id, status);
        if let Outcome::Applied(previous) = &outcome {
            let msg = format!("\"{}\": {} → {}", self.title_of(event_id), previous, status);
            self.activity.record("approval", event_id, msg);
        }
        outcome
    }

    pub fn submit_feedback(&mut self, event_id: &str, feedback: Feedback) -> Outcome<()> {
        let summary = format!("{} rated {}/5", feedback.name, feedback.rating);
        let outcome = self.store.submit_feedback(event_id, feedback);
        if outcome.is_applied() {
            self.activity.record("feedback", event_id, summary);
        }
        outcome
    }

    /// Fresh volunteer id, unique within the event.
    pub fn next_volunteer_id(&self, event_id: &str) -> String {
        let event = self.store.get_event(event_id);
        ids::generate("v", |c| event.is_some_and(|e| e.volunteers.iter().any(|v| v.id == c)))
    }

    pub fn next_task_id(&self, event_id: &str) -> String {
        let event = self.store.get_event(event_id);
        ids::generate("t", |c| event.is_some_and(|e| e.tasks.iter().any(|t| t.id == c)))
    }

    pub fn next_feedback_id(&self, event_id: &str) -> String {
        let event = self.store.get_event(event_id);
        ids::generate("f", |c| event.is_some_and(|e| e.feedback.iter().any(|f| f.id == c)))
    }

    fn title_of(&self, event_id: &str) -> String {
        self.store
            .get_event(event_id)
            .map(|e| e.title.clone())
            .unwrap_or_default()
    }
}
