use crate::cli::commands::{Context, settle};
use crate::cli::parser::{ApprovalAction, Commands};
use crate::core::Session;
use crate::errors::AppResult;
use crate::models::ApprovalStatus;
use crate::ui::messages::{info, success};

impl ApprovalAction {
    pub fn target(self) -> ApprovalStatus {
        match self {
            ApprovalAction::Raise => ApprovalStatus::Pending,
            ApprovalAction::Approve => ApprovalStatus::Approved,
            ApprovalAction::Reject => ApprovalStatus::Rejected,
        }
    }
}

pub fn handle(cmd: &Commands, ctx: &Context, session: &mut Session) -> AppResult<()> {
    if let Commands::Approval { event, action } = cmd {
        // Console-level short-circuit only; the store itself accepts re-approval.
        if *action == ApprovalAction::Approve
            && session
                .store()
                .get_event(event)
                .is_some_and(|e| e.approval_status.is_approved())
        {
            info("Event already approved");
            return Ok(());
        }

        let status = action.target();
        if let Some(previous) = settle(session.set_approval_status(event, status), ctx)? {
            match action {
                ApprovalAction::Raise => success(format!("{} raised for approval", event)),
                _ => success(format!("{}: {} → {}", event, previous, status)),
            }
        }
    }
    Ok(())
}
