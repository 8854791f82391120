use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    /// Submitter
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

impl Feedback {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rating,
            comment: comment.into(),
        }
    }
}
