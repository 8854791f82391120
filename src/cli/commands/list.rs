use crate::cli::commands::Context;
use crate::cli::parser::Commands;
use crate::core::Session;
use crate::errors::{AppError, AppResult};
use crate::models::{ApprovalStatus, Event};
use crate::utils::colors::{color_for_approval, paint};
use crate::utils::date::parse_period;
use crate::utils::format_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context, session: &Session) -> AppResult<()> {
    if let Commands::List {
        query,
        pending,
        status,
        period,
        json,
    } = cmd
    {
        let status = match status {
            Some(code) => Some(
                ApprovalStatus::from_code(code)
                    .ok_or_else(|| AppError::InvalidApprovalStatus(code.clone()))?,
            ),
            None => None,
        };

        let period = match period {
            Some(p) => parse_period(p).map_err(AppError::InvalidPeriod)?,
            None => None,
        };

        let events: Vec<&Event> = session
            .store()
            .search(query.as_deref().unwrap_or(""))
            .into_iter()
            .filter(|e| !*pending || e.approval_status.is_pending())
            .filter(|e| status.is_none_or(|s| e.approval_status == s))
            .filter(|e| period.is_none_or(|p| p.contains_str(&e.date)))
            .collect();

        if *json {
            println!("{}", serde_json::to_string_pretty(&events)?);
            return Ok(());
        }

        if events.is_empty() {
            println!("No events found.");
            return Ok(());
        }

        print_events(&events, ctx.cfg.separator());
    }
    Ok(())
}

fn print_events(events: &[&Event], separator: char) {
    let mut table = Table::new(vec![
        Column::new("ID", 8),
        Column::new("TITLE", 20),
        Column::new("DATE", 10),
        Column::new("VENUE", 12),
        Column::new("VOL", 3),
        Column::new("HOURS", 5),
        Column::new("STATUS", 8),
    ])
    .with_separator(separator);

    for ev in events {
        table.add_row(vec![
            ev.id.clone(),
            ev.title.clone(),
            ev.date.clone(),
            ev.venue.clone(),
            ev.volunteers.len().to_string(),
            format_hours(ev.hours),
            paint(color_for_approval(ev.approval_status), ev.approval_status),
        ]);
    }

    print!("{}", table.render());
}
