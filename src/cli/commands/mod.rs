pub mod approval;
pub mod checkin;
pub mod config;
pub mod create;
pub mod feedback;
pub mod init;
pub mod list;
pub mod log;
pub mod metrics;
pub mod show;
pub mod task;
pub mod templates;
pub mod volunteer;

use crate::config::Config;
use crate::core::Outcome;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::path::PathBuf;

/// Everything a handler needs besides the session.
pub struct Context<'a> {
    pub cfg: &'a Config,
    pub config_path: PathBuf,
    pub strict: bool,
    pub test: bool,
}

/// Resolve a store outcome for the CLI.
///
/// A miss is a warning and `Ok(None)` by default; with `--strict` it is
/// returned as the not-found error.
pub fn settle<T>(outcome: Outcome<T>, ctx: &Context) -> AppResult<Option<T>> {
    match outcome {
        Outcome::Applied(v) => Ok(Some(v)),
        Outcome::Missed(miss) => {
            let err = AppError::from(miss);
            if ctx.strict {
                Err(err)
            } else {
                warning(format!("{}; nothing changed", err));
                Ok(None)
            }
        }
    }
}
