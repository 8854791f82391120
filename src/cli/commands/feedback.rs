use crate::cli::commands::{Context, settle};
use crate::cli::parser::Commands;
use crate::core::Session;
use crate::errors::AppResult;
use crate::models::Feedback;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, ctx: &Context, session: &mut Session) -> AppResult<()> {
    if let Commands::Feedback {
        event,
        name,
        rating,
        comment,
    } = cmd
    {
        let id = session.next_feedback_id(event);
        let fb = Feedback::new(id, name.as_str(), *rating, comment.as_str());

        if settle(session.submit_feedback(event, fb), ctx)?.is_some() {
            success(format!("Feedback from {} recorded ({}/5)", name, rating));
        }
    }
    Ok(())
}
