use serde::Serialize;

/// Built-in event templates offered on the create screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EventTemplate {
    Stall,
    Seminar,
    Drive,
}

impl EventTemplate {
    pub const ALL: [EventTemplate; 3] = [
        EventTemplate::Stall,
        EventTemplate::Seminar,
        EventTemplate::Drive,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            EventTemplate::Stall => "Stall Event",
            EventTemplate::Seminar => "Seminar",
            EventTemplate::Drive => "Drive",
        }
    }

    /// Roles the template brings; one `todo` task is seeded per role.
    pub fn roles(&self) -> &'static [&'static str] {
        match self {
            EventTemplate::Stall => &["Setup", "Food", "Clean"],
            EventTemplate::Seminar => &["Host", "Tech", "Logistics"],
            EventTemplate::Drive => &["Checkpoints", "Vehicles"],
        }
    }

    pub fn summary(&self) -> String {
        self.roles().join(", ")
    }

    /// Helper: convert input code from CLI (`stall`, `seminar`, `drive`, any case)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "stall" | "stall event" => Some(EventTemplate::Stall),
            "seminar" => Some(EventTemplate::Seminar),
            "drive" => Some(EventTemplate::Drive),
            _ => None,
        }
    }
}
