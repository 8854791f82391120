use crate::errors::{AppError, AppResult};

/// Result of a store mutation addressed by id.
///
/// A `Missed` outcome means the target did not exist and nothing changed.
/// Callers that treat a miss as an error use [`Outcome::into_result`].
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Applied(T),
    Missed(Miss),
}

/// Which lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Miss {
    Event(String),
    Volunteer { event: String, volunteer: String },
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn is_missed(&self) -> bool {
        matches!(self, Outcome::Missed(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(v) => Some(v),
            Outcome::Missed(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Applied(v) => Outcome::Applied(f(v)),
            Outcome::Missed(m) => Outcome::Missed(m),
        }
    }

    /// Turn a miss into the matching not-found error.
    pub fn into_result(self) -> AppResult<T> {
        match self {
            Outcome::Applied(v) => Ok(v),
            Outcome::Missed(miss) => Err(miss.into()),
        }
    }
}

impl From<Miss> for AppError {
    fn from(miss: Miss) -> Self {
        match miss {
            Miss::Event(id) => AppError::EventNotFound(id),
            Miss::Volunteer { event, volunteer } => AppError::VolunteerNotFound { event, volunteer },
        }
    }
}
