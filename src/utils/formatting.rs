//! Formatting utilities used for CLI outputs.

use crate::models::{ApprovalStatus, VolunteerStatus};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `4` → "4h", `2.5` → "2.5h"
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}h", hours as i64)
    } else {
        format!("{}h", hours)
    }
}

/// One decimal, or "—" when there is no rating.
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) => format!("{:.1}", r),
        None => "—".to_string(),
    }
}

pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Horizontal bar of `width` cells filled to `percent` (clamped to 0–100).
pub fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Label for an approval status, as shown in lists.
pub fn describe_status(status: ApprovalStatus) -> &'static str {
    match status {
        ApprovalStatus::Pending => "Pending approval",
        ApprovalStatus::Approved => "Approved",
        ApprovalStatus::Rejected => "Rejected",
    }
}

/// Label of the check-in button for a volunteer.
pub fn check_in_action(status: VolunteerStatus) -> &'static str {
    if status.is_checked_in() { "Undo" } else { "Check-in" }
}
