use crate::cli::commands::{Context, settle};
use crate::cli::parser::Commands;
use crate::core::Session;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, ctx: &Context, session: &mut Session) -> AppResult<()> {
    if let Commands::Checkin { event, volunteer } = cmd
        && let Some(status) = settle(session.toggle_check_in(event, volunteer), ctx)?
    {
        success(format!("{} is now {}", volunteer, status));
    }
    Ok(())
}
