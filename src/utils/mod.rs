pub mod colors;
pub mod date;
pub mod formatting;
pub mod ids;
pub mod path;
pub mod table;

pub use formatting::{describe_status, format_hours, format_rating};
