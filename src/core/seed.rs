//! Demo data loaded into a fresh session.

use crate::models::{
    ApprovalStatus, Event, Feedback, Location, Task, Volunteer, VolunteerStatus,
};

pub fn demo_events() -> Vec<Event> {
    let mut stall = Event::new(
        "evt-1",
        "Freshers Welcome Stall",
        "2025-11-20",
        "Central Lawn",
        Some(4.0),
    );
    stall.approval_status = ApprovalStatus::Approved;
    stall.volunteers = vec![
        Volunteer::new("v1", "Aisha", "Check-in")
            .with_status(VolunteerStatus::Assigned)
            .with_location(Location::new(40.0, 30.0))
            .with_score(2.0),
        Volunteer::new("v2", "Rohit", "Food Stall")
            .with_location(Location::new(60.0, 50.0))
            .with_score(1.0),
    ];
    stall.tasks = vec![
        Task::new("t1", "Setup Stall 8:30", Some("v1".into())),
        Task::new("t2", "Manage Food 9:00", Some("v2".into())),
    ];
    stall.feedback = vec![Feedback::new("f1", "Priya", 4, "Well organised")];

    let talk = Event::new(
        "evt-2",
        "Tech Talk: AI for Good",
        "2025-12-05",
        "Auditorium A",
        Some(2.0),
    );

    vec![stall, talk]
}
