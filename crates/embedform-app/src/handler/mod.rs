//! Handler module - TEA update function and transition handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `visibility`: Surface transition rules (initialize, popup, shoutbox)
//! - `submission`: Form submission lifecycle and status mapping

pub(crate) mod submission;
pub(crate) mod update;
pub(crate) mod visibility;


use crate::message::Message;
use embedform_gateway::{EmailParams, SaveFormRequest};

// Re-export main entry point
pub use update::update;

/// Actions the event loop should perform after update
#[derive(Debug, Clone)]
pub enum UpdateAction {
    /// Persist a submission through the gateway; the outcome re-enters
    /// the loop as `SubmissionCompleted` or `SubmissionFailed`
    SubmitForm { request: Box<SaveFormRequest> },

    /// Bump the form view counter (best-effort, failures are dropped)
    IncrementViewCount { form_id: String },

    /// Queue a notification email (best-effort, failures are dropped)
    SendEmail { params: EmailParams },

    /// Measure the container and post a resize directive to the host page
    ReportHeight,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
