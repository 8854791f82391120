use crate::cli::commands::{Context, settle};
use crate::cli::parser::Commands;
use crate::core::Session;
use crate::errors::AppResult;
use crate::models::Task;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, ctx: &Context, session: &mut Session) -> AppResult<()> {
    if let Commands::Task {
        event,
        title,
        assign,
    } = cmd
    {
        // assignee is a weak reference: warn, never refuse
        if let Some(vol) = assign
            && let Some(ev) = session.store().get_event(event)
            && ev.volunteer(vol).is_none()
        {
            warning(format!("Volunteer {} is not part of {}", vol, event));
        }

        let id = session.next_task_id(event);
        let task = Task::new(id.clone(), title.as_str(), assign.clone());

        if settle(session.assign_task(event, task), ctx)?.is_some() {
            success(format!("Task {} \"{}\" added to {}", id, title, event));
        }
    }
    Ok(())
}
