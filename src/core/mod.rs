pub mod activity;
pub mod calculator;
pub mod logic;
pub mod outcome;
pub mod seed;
pub mod session;
pub mod store;

pub use outcome::{Miss, Outcome};
pub use session::Session;
pub use store::EventStore;
