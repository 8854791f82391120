#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use campusclub::models::{Event, Feedback, Location, Volunteer, VolunteerStatus};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, in test mode, with a config path that does not exist
/// (defaults apply) unless the test writes one.
pub fn cc(config: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("campusclub");
    cmd.env_remove("CAMPUSCLUB_LOG")
        .args(["--test", "--config", config]);
    cmd
}

/// Unique config path inside the system temp dir; any existing file is removed.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_campusclub.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn event(id: &str, hours: f64) -> Event {
    Event::new(id, format!("Event {}", id), "2025-11-20", "Central Lawn", Some(hours))
}

pub fn volunteer(id: &str, status: VolunteerStatus) -> Volunteer {
    Volunteer::new(id, format!("Vol {}", id), "Helper")
        .with_status(status)
        .with_location(Location::new(20.0, 20.0))
}

pub fn feedback(id: &str, rating: u8) -> Feedback {
    Feedback::new(id, "Priya", rating, "Well organised")
}
