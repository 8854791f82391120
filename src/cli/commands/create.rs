use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::Session;
use crate::errors::{AppError, AppResult};
use crate::models::EventTemplate;
use crate::ui::messages::{info, success};
use crate::utils::format_hours;

pub fn handle(cmd: &Commands, ctx: &Context, session: &mut Session) -> AppResult<()> {
    if let Commands::Create {
        title,
        date,
        venue,
        hours,
        template,
    } = cmd
    {
        let template = match template {
            Some(code) => Some(
                EventTemplate::from_code(code)
                    .ok_or_else(|| AppError::InvalidTemplate(code.clone()))?,
            ),
            None => None,
        };

        let ev = session.create_event(title, date, venue, *hours, template);

        success(format!(
            "Created {} \"{}\" ({}, {})",
            ev.id,
            ev.title,
            format_hours(ev.hours),
            ev.approval_status
        ));
        if let Some(t) = template {
            info(format!("Template {} loaded: {}", t.title(), t.summary()));
        }
        info(format!(
            "Events are created pending; share {} once approved.",
            ctx.cfg.share_link(&ev.id)
        ));
    }
    Ok(())
}
