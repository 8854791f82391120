use crate::core::Session;
use crate::errors::AppResult;
use ansi_term::Colour;

/// ANSI colour per operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "create" => Colour::Green,
        "volunteer" => Colour::Cyan,
        "task" => Colour::Blue,
        "checkin" => Colour::Yellow,
        "approval" => Colour::Purple,
        "feedback" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

pub fn handle(session: &Session) -> AppResult<()> {
    let log = session.activity();
    if log.is_empty() {
        println!("No activity in this session.");
        return Ok(());
    }

    for (i, entry) in log.entries().iter().enumerate() {
        let op = format!("{:<9}", entry.operation);
        println!(
            "{:>3} {} {} {:<16} {}",
            i + 1,
            entry.at.format("%FT%T%:z"),
            color_for_operation(&entry.operation).paint(op),
            entry.target,
            entry.message
        );
    }
    Ok(())
}
