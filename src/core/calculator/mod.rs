//! Derived organizer analytics.
//!
//! Every function here is a pure fold over a slice of events and never fails:
//! empty collections resolve to the documented fallback constants.

pub mod contribution;
pub mod efficiency;
pub mod hours;
pub mod rating;
pub mod retention;
pub mod snapshot;

pub use contribution::contribution_percent;
pub use efficiency::efficiency_score;
pub use hours::average_hours;
pub use rating::{average_rating, event_average_rating};
pub use retention::retention_rate;
pub use snapshot::per_event_snapshot;
