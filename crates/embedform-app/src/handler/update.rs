//! Main update function - handles state transitions (TEA pattern)

use tracing::warn;

use crate::message::Message;
use crate::state::WidgetState;

use super::{submission, visibility, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
///
/// Never panics and never fails: configuration absence is a normal
/// branch, and side-effect failures arrive as their own messages.
pub fn update(state: &mut WidgetState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Surface Transitions
        // ─────────────────────────────────────────────────────────
        Message::Initialize => visibility::handle_initialize(state),

        Message::ConfirmCallout => visibility::handle_confirm_callout(state),

        Message::ToggleShoutbox { visible } => visibility::handle_toggle_shoutbox(state, visible),

        Message::OpenPopup => visibility::handle_open_popup(state),

        Message::ClosePopup => visibility::handle_close_popup(state),

        // ─────────────────────────────────────────────────────────
        // Submission
        // ─────────────────────────────────────────────────────────
        Message::Submit { doc } => submission::handle_submit(state, doc),

        Message::SubmissionCompleted { response } => {
            submission::handle_submission_completed(state, response)
        }

        Message::SubmissionFailed { error } => {
            submission::handle_submission_failed(state, error)
        }

        Message::ResetSubmission => submission::handle_reset_submission(state),

        // ─────────────────────────────────────────────────────────
        // Fire-and-Forget Side Effects
        // ─────────────────────────────────────────────────────────
        Message::SendEmail { params } => UpdateResult::action(UpdateAction::SendEmail { params }),

        Message::ReportHeight => UpdateResult::action(UpdateAction::ReportHeight),

        Message::ViewCountFailed { form_id, error } => {
            warn!("View count increment failed for form {}: {}", form_id, error);
            UpdateResult::none()
        }

        // The engine intercepts Shutdown before dispatch; reaching here
        // just means a collaborator sent it to a stopped loop.
        Message::Shutdown => UpdateResult::none(),
    }
}
