use crate::cli::commands::{Context, settle};
use crate::cli::parser::Commands;
use crate::core::Session;
use crate::core::calculator::per_event_snapshot;
use crate::errors::AppResult;
use crate::models::{Event, Volunteer};
use crate::ui::messages::header;
use crate::utils::colors::{color_for_approval, color_for_volunteer, colorize_optional, paint};
use crate::utils::formatting::{bold, check_in_action};
use crate::utils::{describe_status, format_hours};
use crate::utils::table::{Column, Table};

const MAP_WIDTH: usize = 40;
const MAP_HEIGHT: usize = 10;

pub fn handle(cmd: &Commands, ctx: &Context, session: &mut Session) -> AppResult<()> {
    if let Commands::Show { event } = cmd {
        if settle(session.select(event), ctx)?.is_none() {
            return Ok(());
        }
        if let Some(ev) = session.selected_event() {
            print_event(ev, ctx);
        }
    }
    Ok(())
}

fn print_event(ev: &Event, ctx: &Context) {
    header(&ev.title);
    println!("{} • {}", colorize_optional(&ev.date), colorize_optional(&ev.venue));
    println!(
        "Status: {}",
        paint(
            color_for_approval(ev.approval_status),
            describe_status(ev.approval_status)
        )
    );
    println!("Link:   {}\n", ctx.cfg.share_link(&ev.id));

    println!("{}", bold("Volunteers"));
    if ev.volunteers.is_empty() {
        println!("No volunteers yet");
    } else {
        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("NAME", 12),
            Column::new("ROLE", 10),
            Column::new("STATUS", 10),
            Column::new("ACTION", 8),
        ])
        .with_separator(ctx.cfg.separator());
        for v in &ev.volunteers {
            table.add_row(vec![
                v.id.clone(),
                v.name.clone(),
                v.role.clone(),
                paint(color_for_volunteer(v.status), v.status),
                check_in_action(v.status).to_string(),
            ]);
        }
        print!("{}", table.render());
        println!("\n{}", bold("Live view"));
        print!("{}", render_map(&ev.volunteers));
    }

    println!("\n{}", bold("Tasks"));
    if ev.tasks.is_empty() {
        println!("No tasks yet");
    } else {
        for t in &ev.tasks {
            println!(
                "- {} [{}] assigned to: {}",
                t.title,
                t.status.as_str(),
                colorize_optional(t.assigned_to.as_deref().unwrap_or("—"))
            );
        }
    }

    let snap = per_event_snapshot(ev);
    println!("\n{}", bold("Event snapshot"));
    println!("Volunteers: {}", snap.volunteer_count);
    println!("Checked-in: {}", snap.checked_in_count);
    println!("Hours: {}", format_hours(ev.hours));
}

/// Plot each volunteer's initial on a small character grid.
pub fn render_map(volunteers: &[Volunteer]) -> String {
    let mut grid = vec![vec!['·'; MAP_WIDTH]; MAP_HEIGHT];

    for v in volunteers {
        let (x, y) = v.location.display_point();
        let col = cell(x, MAP_WIDTH);
        let row = cell(y, MAP_HEIGHT);
        grid[row][col] = v.initial();
    }

    let mut out = String::new();
    for row in grid {
        out.extend(row);
        out.push('\n');
    }
    out
}

fn cell(percent: f64, size: usize) -> usize {
    let idx = (percent.clamp(0.0, 100.0) / 100.0 * size as f64) as usize;
    idx.min(size - 1)
}
