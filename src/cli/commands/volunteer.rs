use crate::cli::commands::{Context, settle};
use crate::cli::parser::Commands;
use crate::core::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{Location, Volunteer, VolunteerStatus};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, ctx: &Context, session: &mut Session) -> AppResult<()> {
    if let Commands::Volunteer {
        event,
        name,
        role,
        status,
        x,
        y,
        score,
    } = cmd
    {
        let status = VolunteerStatus::from_code(status)
            .ok_or_else(|| AppError::InvalidVolunteerStatus(status.clone()))?;

        let id = session.next_volunteer_id(event);
        let volunteer = Volunteer::new(id.clone(), name.as_str(), role.as_str())
            .with_status(status)
            .with_location(Location::new(*x, *y))
            .with_score(score.max(0.0));

        if settle(session.add_volunteer(event, volunteer), ctx)?.is_some() {
            success(format!("Volunteer {} ({}) added to {} as {}", name, id, event, status));
        }
    }
    Ok(())
}
