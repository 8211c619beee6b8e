//! Message types for the widget controller (TEA pattern)

use embedform_core::FormDoc;
use embedform_gateway::{EmailParams, SaveFormResponse};

/// All possible messages/transitions in the widget
#[derive(Debug, Clone)]
pub enum Message {
    /// Decide the initial surface from the config snapshot.
    /// Sent exactly once, when the engine starts.
    Initialize,

    // ─────────────────────────────────────────────────────────
    // Surface Transitions
    // ─────────────────────────────────────────────────────────
    /// The visitor accepted the callout teaser; show the form
    ConfirmCallout,

    /// The circular shoutbox control was toggled.
    ///
    /// `visible` reports whether the shoutbox is currently open; the form
    /// becomes its negation. The inverted parameter is inherited from the
    /// embed script contract and kept as-is.
    ToggleShoutbox { visible: Option<bool> },

    /// A host-page trigger opened the popup
    OpenPopup,

    /// Collapse the popup shell and every surface
    ClosePopup,

    // ─────────────────────────────────────────────────────────
    // Submission
    // ─────────────────────────────────────────────────────────
    /// The visitor completed the form
    Submit { doc: FormDoc },

    /// The gateway answered a `save_form` call
    SubmissionCompleted { response: SaveFormResponse },

    /// The `save_form` call never reached the backend
    SubmissionFailed { error: String },

    /// Show a fresh form after a prior success/error
    ResetSubmission,

    // ─────────────────────────────────────────────────────────
    // Fire-and-Forget Side Effects
    // ─────────────────────────────────────────────────────────
    /// Queue a notification email; no result is consumed
    SendEmail { params: EmailParams },

    /// Measure the rendered container and notify the host page
    ReportHeight,

    /// A best-effort view-count increment failed (log only)
    ViewCountFailed { form_id: String, error: String },

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Widget unmounted; stop the engine loop
    Shutdown,
}
