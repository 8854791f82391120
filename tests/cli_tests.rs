use predicates::prelude::*;

mod common;
use common::{cc, temp_config};

#[test]
fn list_shows_seeded_events_most_recent_first() {
    let cfg = temp_config("list_seeded");
    let out = cc(&cfg).arg("list").output().expect("run list");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let stall = stdout.find("Freshers Welcome Stall").expect("stall listed");
    let talk = stdout.find("Tech Talk: AI for Good").expect("talk listed");
    assert!(stall < talk);
}

#[test]
fn list_filters_by_query_pending_and_period() {
    let cfg = temp_config("list_filters");

    cc(&cfg)
        .args(["list", "--query", "TECH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tech Talk").and(predicate::str::contains("Freshers").not()));

    cc(&cfg)
        .args(["list", "--pending"])
        .assert()
        .success()
        .stdout(predicate::str::contains("evt-2").and(predicate::str::contains("evt-1").not()));

    cc(&cfg)
        .args(["list", "--period", "2025-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("evt-1").and(predicate::str::contains("evt-2").not()));

    cc(&cfg)
        .args(["list", "--period", "next-week"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn list_json_uses_camel_case() {
    let cfg = temp_config("list_json");
    let out = cc(&cfg).args(["list", "--json"]).output().unwrap();
    assert!(out.status.success());

    let events: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(events[0]["id"], "evt-1");
    assert_eq!(events[0]["approvalStatus"], "approved");
    assert_eq!(events[0]["volunteers"][0]["status"], "assigned");
    assert_eq!(events[0]["tasks"][0]["assignedTo"], "v1");
    assert_eq!(events[1]["approvalStatus"], "pending");
}

#[test]
fn no_seed_starts_empty() {
    let cfg = temp_config("no_seed");
    cc(&cfg)
        .args(["--no-seed", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events found."));

    let out = cc(&cfg).args(["--no-seed", "metrics", "--json"]).output().unwrap();
    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["efficiencyScore"], 0);
    assert_eq!(summary["retentionRate"], 0.0);
    assert_eq!(summary["averageHours"], 0.0);
}

#[test]
fn metrics_json_for_demo_data() {
    let cfg = temp_config("metrics_demo");
    let out = cc(&cfg).args(["metrics", "--json"]).output().unwrap();
    assert!(out.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(summary["eventCount"], 2);
    assert_eq!(summary["averageHours"], 3.0);
    assert_eq!(summary["averageRating"], 2.0);
    assert_eq!(summary["efficiencyScore"], 9);
    assert_eq!(summary["pendingApprovals"], 1);
}

#[test]
fn event_analytics_show_contribution_and_rating() {
    let cfg = temp_config("metrics_event");
    let out = cc(&cfg)
        .args(["metrics", "--event", "evt-1", "--json"])
        .output()
        .unwrap();
    let analytics: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(analytics["snapshot"]["volunteerCount"], 2);
    assert_eq!(analytics["snapshot"]["checkedInCount"], 0);
    assert_eq!(analytics["averageRating"], 4.0);
    assert_eq!(analytics["contributions"][0]["percent"], 60.0);
    assert_eq!(analytics["contributions"][1]["percent"], 40.0);

    cc(&cfg)
        .args(["metrics", "--event", "evt-2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Avg rating: —").and(predicate::str::contains("No feedback yet")));
}

#[test]
fn show_prints_quick_view() {
    let cfg = temp_config("show");
    cc(&cfg)
        .args(["show", "evt-1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Freshers Welcome Stall")
                .and(predicate::str::contains("Aisha"))
                .and(predicate::str::contains("Setup Stall 8:30"))
                .and(predicate::str::contains("Checked-in: 0"))
                .and(predicate::str::contains("https://campus.example/event/evt-1")),
        );
}

#[test]
fn unknown_event_is_a_warning_by_default() {
    let cfg = temp_config("unknown_default");
    cc(&cfg)
        .args(["checkin", "evt-404", "v1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No event with id evt-404; nothing changed"));
}

#[test]
fn unknown_event_fails_in_strict_mode() {
    let cfg = temp_config("unknown_strict");
    cc(&cfg)
        .args(["--strict", "feedback", "evt-404", "--name", "Riya", "--rating", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: No event with id evt-404"));

    cc(&cfg)
        .args(["--strict", "checkin", "evt-1", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No volunteer ghost in event evt-1"));
}

#[test]
fn approve_twice_is_short_circuited() {
    let cfg = temp_config("approve_twice");
    cc(&cfg)
        .args(["approval", "evt-1", "approve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Event already approved"));

    cc(&cfg)
        .args(["approval", "evt-2", "approve"])
        .assert()
        .success()
        .stdout(predicate::str::contains("evt-2: pending → approved"));
}

#[test]
fn rating_outside_one_to_five_is_rejected_by_the_parser() {
    let cfg = temp_config("rating_range");
    cc(&cfg)
        .args(["feedback", "evt-1", "--name", "Riya", "--rating", "7"])
        .assert()
        .failure();
}

#[test]
fn create_with_unknown_template_fails() {
    let cfg = temp_config("bad_template");
    cc(&cfg)
        .args(["create", "--template", "gala"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown template: gala"));
}

#[test]
fn templates_are_listed() {
    let cfg = temp_config("templates");
    cc(&cfg)
        .arg("templates")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Stall Event")
                .and(predicate::str::contains("Host, Tech, Logistics"))
                .and(predicate::str::contains("Checkpoints, Vehicles")),
        );
}

#[test]
fn fresh_session_has_no_activity() {
    let cfg = temp_config("log_empty");
    cc(&cfg)
        .arg("log")
        .assert()
        .success()
        .stdout(predicate::str::contains("No activity in this session."));
}

#[test]
fn list_filters_by_approval_status() {
    let cfg = temp_config("list_status");
    cc(&cfg)
        .args(["list", "--status", "Approved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("evt-1").and(predicate::str::contains("evt-2").not()));

    cc(&cfg)
        .args(["list", "--status", "archived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid approval status: archived"));
}
