//! ANSI color helper utilities for terminal output.

use crate::models::{ApprovalStatus, VolunteerStatus};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// pending → yellow, approved → green, rejected → red
pub fn color_for_approval(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Pending => YELLOW,
        ApprovalStatus::Approved => GREEN,
        ApprovalStatus::Rejected => RED,
    }
}

pub fn color_for_volunteer(status: VolunteerStatus) -> &'static str {
    match status {
        VolunteerStatus::CheckedIn => GREEN,
        VolunteerStatus::Assigned => BLUE,
        VolunteerStatus::SignedUp => GREY,
    }
}

/// Efficiency score color: ≥ 70 green, ≥ 40 yellow, below red.
pub fn color_for_score(score: u8) -> &'static str {
    if score >= 70 {
        GREEN
    } else if score >= 40 {
        YELLOW
    } else {
        RED
    }
}

/// Grey out placeholder values ("", "—", "-").
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "—" || v == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn paint(color: &str, value: impl std::fmt::Display) -> String {
    format!("{color}{value}{RESET}")
}
