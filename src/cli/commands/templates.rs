use crate::errors::AppResult;
use crate::models::EventTemplate;
use crate::ui::messages::header;

pub fn handle() -> AppResult<()> {
    header("Event templates");
    for t in EventTemplate::ALL {
        println!("- {:<12} {}", t.title(), t.summary());
    }
    println!("\nUse: campusclub create --template <stall|seminar|drive> ...");
    Ok(())
}
