use campusclub::core::calculator::{
    average_hours, average_rating, contribution_percent, efficiency_score,
    event_average_rating, per_event_snapshot, retention_rate,
};
use campusclub::core::logic::Core;
use campusclub::models::{Event, VolunteerStatus};

mod common;
use common::{event, feedback, volunteer};

const EPS: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

/// hours 4, one checked-in and one assigned volunteer, one rating of 4
fn single_event_fixture() -> Vec<Event> {
    let mut ev = event("evt-1", 4.0);
    ev.volunteers.push(volunteer("v1", VolunteerStatus::CheckedIn));
    ev.volunteers.push(volunteer("v2", VolunteerStatus::Assigned));
    ev.feedback.push(feedback("f1", 4));
    vec![ev]
}

/// hours 2 without feedback, hours 6 with a single rating of 5
fn dilution_fixture() -> Vec<Event> {
    let quiet = event("evt-1", 2.0);
    let mut rated = event("evt-2", 6.0);
    rated.feedback.push(feedback("f1", 5));
    vec![quiet, rated]
}

#[test]
fn empty_collection_defaults() {
    assert_eq!(average_hours(&[]), 0.0);
    assert_eq!(average_rating(&[]), 0.0);
    assert_eq!(retention_rate(&[]), 0.0);
    assert_eq!(efficiency_score(&[]), 0);
}

#[test]
fn single_event_scenario() {
    let events = single_event_fixture();

    let snap = per_event_snapshot(&events[0]);
    assert_eq!(snap.volunteer_count, 2);
    assert_eq!(snap.checked_in_count, 1);

    assert!(close(average_rating(&events), 4.0));
    assert!(close(retention_rate(&events), 0.7));
    assert!(close(average_hours(&events), 4.0));

    // 1 × 4 × (4/5) × 1.7 × 3 = 16.32
    assert_eq!(efficiency_score(&events), 16);
}

#[test]
fn events_without_feedback_dilute_the_average_rating() {
    let events = dilution_fixture();

    assert!(close(average_hours(&events), 4.0));
    // (0 + 5) / (max(1,0) + max(1,1))
    assert!(close(average_rating(&events), 2.5));

    // no volunteers: retention is the 0.2 baseline
    assert!(close(retention_rate(&events), 0.2));

    // 2 × 4 × 0.5 × 1.2 × 3 = 14.4
    assert_eq!(efficiency_score(&events), 14);
}

#[test]
fn retention_counts_volunteers_across_events() {
    let mut a = event("evt-1", 2.0);
    a.volunteers.push(volunteer("v1", VolunteerStatus::CheckedIn));
    a.volunteers.push(volunteer("v2", VolunteerStatus::CheckedIn));
    let mut b = event("evt-2", 2.0);
    b.volunteers.push(volunteer("v1", VolunteerStatus::SignedUp));
    b.volunteers.push(volunteer("v2", VolunteerStatus::Assigned));

    assert!(close(retention_rate(&[a, b]), 0.2 + 2.0 / 4.0));
}

#[test]
fn zero_rating_falls_back_to_three() {
    // no feedback at all → average 0 → rating 3 is used
    let events = vec![event("evt-1", 5.0)];
    assert_eq!(average_rating(&events), 0.0);
    // 1 × 5 × 0.6 × 1.2 × 3 = 10.8
    assert_eq!(efficiency_score(&events), 11);
}

#[test]
fn short_events_count_at_least_one_hour() {
    let events = vec![event("evt-1", 0.25)];
    // 1 × max(1, 0.25) × 0.6 × 1.2 × 3 = 2.16
    assert_eq!(efficiency_score(&events), 2);
}

#[test]
fn efficiency_is_clamped_to_one_hundred() {
    let events: Vec<Event> = (0..10)
        .map(|i| {
            let mut ev = event(&format!("evt-{}", i), 10.0);
            ev.volunteers.push(volunteer("v1", VolunteerStatus::CheckedIn));
            ev.feedback.push(feedback("f1", 5));
            ev
        })
        .collect();

    assert_eq!(efficiency_score(&events), 100);
}

#[test]
fn efficiency_rounds_half_up() {
    // retention 0.2 + 3/10 = 0.5 → 1 × 1 × (5/5) × 1.5 × 3 = 4.5
    let mut ev = event("evt-1", 1.0);
    for i in 0..10 {
        let status = if i < 3 {
            VolunteerStatus::CheckedIn
        } else {
            VolunteerStatus::SignedUp
        };
        ev.volunteers.push(volunteer(&format!("v{}", i), status));
    }
    ev.feedback.push(feedback("f1", 5));

    assert_eq!(efficiency_score(&[ev]), 5);
}

#[test]
fn efficiency_stays_in_range_for_growing_collections() {
    let mut events = Vec::new();
    for i in 0..40 {
        let mut ev = event(&format!("evt-{}", i), (i % 7) as f64 + 0.5);
        if i % 3 == 0 {
            ev.feedback.push(feedback("f", (i % 5 + 1) as u8));
        }
        if i % 2 == 0 {
            ev.volunteers.push(volunteer("v", VolunteerStatus::CheckedIn));
        }
        events.push(ev);
        assert!(efficiency_score(&events) <= 100);
    }
}

#[test]
fn non_finite_hours_do_not_poison_the_average() {
    let mut broken = event("evt-1", 4.0);
    broken.hours = f64::NAN;
    let events = vec![broken, event("evt-2", 4.0)];

    assert!(close(average_hours(&events), 2.0));
    assert!(efficiency_score(&events) <= 100);
}

#[test]
fn per_event_rating_and_contribution() {
    let mut ev = single_event_fixture().remove(0);
    assert_eq!(event_average_rating(&ev), Some(4.0));
    ev.feedback.push(feedback("f2", 5));
    assert_eq!(event_average_rating(&ev), Some(4.5));
    assert_eq!(event_average_rating(&event("evt-2", 2.0)), None);

    let v = volunteer("v1", VolunteerStatus::Assigned).with_score(2.0);
    assert_eq!(contribution_percent(&v), 60.0);
    assert_eq!(contribution_percent(&volunteer("v2", VolunteerStatus::Assigned)), 20.0);
}

#[test]
fn dashboard_bundles_all_aggregates() {
    let mut events = single_event_fixture();
    events.push(event("evt-2", 2.0));

    let summary = Core::build_dashboard(&events);
    assert_eq!(summary.event_count, 2);
    assert!(close(summary.average_hours, 3.0));
    assert!(close(summary.average_rating, 2.0));
    assert!(close(summary.retention_rate, 0.7));
    assert_eq!(summary.efficiency_score, efficiency_score(&events));
    assert_eq!(summary.pending_approvals, 2);
}
