use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VolunteerStatus {
    #[default]
    SignedUp,
    Assigned,
    CheckedIn,
}

impl VolunteerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolunteerStatus::SignedUp => "signed-up",
            VolunteerStatus::Assigned => "assigned",
            VolunteerStatus::CheckedIn => "checked-in",
        }
    }

    /// Convert CLI input → enum. Accepts `signed-up`, `signed_up` and `signedup`.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "signed-up" | "signedup" => Some(Self::SignedUp),
            "assigned" => Some(Self::Assigned),
            "checked-in" | "checkedin" => Some(Self::CheckedIn),
            _ => None,
        }
    }

    pub fn is_checked_in(&self) -> bool {
        matches!(self, VolunteerStatus::CheckedIn)
    }

    /// Check-in toggle: `checked-in` goes back to `assigned`, anything else
    /// becomes `checked-in`. Undoing never restores `signed-up`.
    pub fn toggled(self) -> Self {
        if self.is_checked_in() {
            VolunteerStatus::Assigned
        } else {
            VolunteerStatus::CheckedIn
        }
    }
}

impl fmt::Display for VolunteerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
