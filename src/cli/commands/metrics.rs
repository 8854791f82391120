use crate::cli::commands::{Context, settle};
use crate::cli::parser::Commands;
use crate::core::Session;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::Event;
use crate::models::dashboard::{DashboardSummary, EventAnalytics};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET, color_for_score, paint};
use crate::utils::formatting::{bar, bold, format_percent};
use crate::utils::{format_hours, format_rating};

pub fn handle(cmd: &Commands, ctx: &Context, session: &mut Session) -> AppResult<()> {
    if let Commands::Metrics { event, json } = cmd {
        match event {
            Some(id) => {
                if settle(session.select(id), ctx)?.is_none() {
                    return Ok(());
                }
                if let Some(ev) = session.selected_event() {
                    let analytics = Core::build_event_analytics(ev);
                    if *json {
                        println!("{}", serde_json::to_string_pretty(&analytics)?);
                    } else {
                        print_event_analytics(ev, &analytics);
                    }
                }
            }
            None => {
                let summary = session.dashboard();
                if *json {
                    println!("{}", serde_json::to_string_pretty(&summary)?);
                } else {
                    print_dashboard(&summary, session, ctx);
                }
            }
        }
    }
    Ok(())
}

fn print_dashboard(summary: &DashboardSummary, session: &Session, ctx: &Context) {
    header("Organizer dashboard");
    println!("Signed in as {}\n", bold(&ctx.cfg.organizer));

    println!("{}• Events on platform:{} {}", CYAN, RESET, summary.event_count);
    println!(
        "{}• Average hours:{} {}",
        CYAN,
        RESET,
        format_hours((summary.average_hours * 100.0).round() / 100.0)
    );
    println!("{}• Average rating:{} {:.2}", CYAN, RESET, summary.average_rating);
    println!(
        "{}• Retention rate:{} {:.2} ({})",
        CYAN,
        RESET,
        summary.retention_rate,
        format_percent(summary.retention_rate)
    );
    println!(
        "{}• Organizer efficiency:{} {}",
        CYAN,
        RESET,
        paint(
            color_for_score(summary.efficiency_score),
            summary.efficiency_score
        )
    );

    println!("\n{}", bold("Pending approvals"));
    let pending = session.store().pending_approvals();
    if pending.is_empty() {
        println!("No pending approvals");
    } else {
        for ev in pending {
            println!("- {} • {} ({})", ev.title, ev.date, ev.id);
        }
    }

    let recent: Vec<_> = session.activity().recent(5).collect();
    if !recent.is_empty() {
        println!("\n{}", bold("Recent activity"));
        for entry in recent {
            println!("- {} • {}", entry.message, entry.at.format("%H:%M:%S"));
        }
    }
}

fn print_event_analytics(ev: &Event, analytics: &EventAnalytics) {
    header(format!("Post-event analytics: {}", ev.title));

    println!(
        "Checked-in {} / {} volunteers\n",
        analytics.snapshot.checked_in_count, analytics.snapshot.volunteer_count
    );

    println!("{}", bold("Contribution"));
    for c in &analytics.contributions {
        println!("{:<12} {} {:>4}%", c.name, bar(c.percent, 20), c.percent);
    }

    println!("\n{}", bold("Participant feedback"));
    println!("Avg rating: {}", format_rating(analytics.average_rating));
    if ev.feedback.is_empty() {
        println!("No feedback yet");
    } else {
        for f in &ev.feedback {
            println!("\"{}\" - {} ({}/5)", f.comment, f.name, f.rating);
        }
    }
}
