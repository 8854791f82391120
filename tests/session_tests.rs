use campusclub::core::Session;
use campusclub::core::store::EventStore;
use campusclub::models::{ApprovalStatus, EventTemplate, VolunteerStatus};

mod common;
use common::{event, feedback, volunteer};

#[test]
fn seeded_session_selects_the_first_event() {
    let session = Session::seeded();
    assert_eq!(session.store().len(), 2);
    assert_eq!(session.selected_event().map(|e| e.id.as_str()), Some("evt-1"));
    assert!(session.activity().is_empty());
}

#[test]
fn seeded_dashboard_matches_demo_numbers() {
    let summary = Session::seeded().dashboard();
    // hours (4 + 2) / 2, rating 4 / (1 + 1), nobody checked in
    assert_eq!(summary.average_hours, 3.0);
    assert_eq!(summary.average_rating, 2.0);
    assert!((summary.retention_rate - 0.2).abs() < 1e-9);
    // 2 × 3 × 0.4 × 1.2 × 3 = 8.64
    assert_eq!(summary.efficiency_score, 9);
    assert_eq!(summary.pending_approvals, 1);
}

#[test]
fn create_selects_the_new_event_and_logs_it() {
    let mut session = Session::empty();
    let ev = session.create_event("Blood Drive", "2026-01-10", "Gym", Some(5.0), None);

    assert_eq!(session.selected_event().map(|e| e.id.clone()), Some(ev.id.clone()));
    assert_eq!(ev.approval_status, ApprovalStatus::Pending);
    assert_eq!(session.activity().len(), 1);
    assert_eq!(session.activity().entries()[0].operation, "create");
}

#[test]
fn template_fills_title_and_seeds_tasks() {
    let mut session = Session::empty();
    let ev = session.create_event("", "2026-02-01", "Hall", None, Some(EventTemplate::Stall));

    assert_eq!(ev.title, "Stall Event");
    let titles: Vec<&str> = ev.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Setup", "Food", "Clean"]);
    assert!(ev.tasks.iter().all(|t| t.assigned_to.is_none()));

    let mut ids: Vec<&str> = ev.tasks.iter().map(|t| t.id.as_str()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

#[test]
fn template_keeps_an_explicit_title() {
    let mut session = Session::empty();
    let ev = session.create_event("Freshers Seminar", "", "", None, Some(EventTemplate::Seminar));
    assert_eq!(ev.title, "Freshers Seminar");
    assert_eq!(ev.tasks.len(), 3);
}

#[test]
fn misses_are_not_logged() {
    let mut session = Session::new(EventStore::from_events(vec![event("evt-1", 2.0)]));

    let _ = session.add_volunteer("evt-x", volunteer("v1", VolunteerStatus::SignedUp));
    let _ = session.submit_feedback("evt-x", feedback("f1", 3));
    let _ = session.toggle_check_in("evt-1", "ghost");
    assert!(session.activity().is_empty());

    let _ = session.add_volunteer("evt-1", volunteer("v1", VolunteerStatus::SignedUp));
    let _ = session.toggle_check_in("evt-1", "v1");
    let _ = session.set_approval_status("evt-1", ApprovalStatus::Approved);
    let ops: Vec<&str> = session
        .activity()
        .entries()
        .iter()
        .map(|e| e.operation.as_str())
        .collect();
    assert_eq!(ops, ["volunteer", "checkin", "approval"]);

    let newest = session.activity().recent(1).next().unwrap();
    assert_eq!(newest.operation, "approval");
}

#[test]
fn select_unknown_event_keeps_selection() {
    let mut session = Session::seeded();
    assert!(session.select("evt-2").is_applied());
    assert!(session.select("evt-404").is_missed());
    assert_eq!(session.selected_event().map(|e| e.id.as_str()), Some("evt-2"));
}

#[test]
fn generated_child_ids_do_not_collide() {
    let mut session = Session::seeded();
    for _ in 0..5 {
        let id = session.next_volunteer_id("evt-1");
        let _ = session.add_volunteer("evt-1", volunteer(&id, VolunteerStatus::SignedUp));
    }
    let ev = session.store().get_event("evt-1").unwrap();
    let mut ids: Vec<&str> = ev.volunteers.iter().map(|v| v.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 7);
}
