//! Submission lifecycle handlers
//!
//! None of these touch surface visibility: the form renderer decides what
//! to show from `current_status` alone, so a late-arriving gateway result
//! applies cleanly even after the visitor has closed the popup.

use chrono::Utc;

use crate::state::WidgetState;
use embedform_core::{FieldError, FormDoc, SubmissionStatus};
use embedform_gateway::{SaveFormRequest, SaveFormResponse};

use super::{UpdateAction, UpdateResult};

/// The visitor completed the form; hand the document to the gateway
pub fn handle_submit(state: &mut WidgetState, mut doc: FormDoc) -> UpdateResult {
    if doc.submitted_at.is_none() {
        doc.submitted_at = Some(Utc::now());
    }

    let request = SaveFormRequest {
        integration_id: state.integration().id.clone(),
        form_id: state.form().id.clone(),
        doc,
        browser_info: state.config().browser_info.clone(),
    };

    UpdateResult::action(UpdateAction::SubmitForm {
        request: Box::new(request),
    })
}

/// Map the gateway's answer onto the submission status
///
/// Errors from a rejected submission are passed through verbatim.
pub fn handle_submission_completed(
    state: &mut WidgetState,
    response: SaveFormResponse,
) -> UpdateResult {
    state.current_status = if response.is_ok() {
        SubmissionStatus::Success
    } else {
        SubmissionStatus::Error(response.errors.unwrap_or_default())
    };

    UpdateResult::none()
}

/// The save call never produced a response (network/transport failure)
pub fn handle_submission_failed(state: &mut WidgetState, error: String) -> UpdateResult {
    state.current_status = SubmissionStatus::Error(vec![FieldError::new(error)]);
    UpdateResult::none()
}

/// Redisplay a fresh form after a prior success or error
pub fn handle_reset_submission(state: &mut WidgetState) -> UpdateResult {
    state.current_status = SubmissionStatus::Initial;
    UpdateResult::none()
}
