pub mod approval_status;
pub mod dashboard;
pub mod event;
pub mod feedback;
pub mod location;
pub mod task;
pub mod template;
pub mod volunteer;
pub mod volunteer_status;

pub use approval_status::ApprovalStatus;
pub use event::Event;
pub use feedback::Feedback;
pub use location::Location;
pub use task::{Task, TaskStatus};
pub use template::EventTemplate;
pub use volunteer::Volunteer;
pub use volunteer_status::VolunteerStatus;
