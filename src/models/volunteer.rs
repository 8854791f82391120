use super::{location::Location, volunteer_status::VolunteerStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub status: VolunteerStatus,
    #[serde(default)]
    pub location: Location,
    /// Contribution weight, display only.
    #[serde(default)]
    pub score: f64,
}

impl Volunteer {
    /// A fresh sign-up: status `signed-up`, score 0.
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: role.into(),
            status: VolunteerStatus::SignedUp,
            location: Location::default(),
            score: 0.0,
        }
    }

    pub fn with_status(mut self, status: VolunteerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    /// First character of the name, used as the map avatar.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}
