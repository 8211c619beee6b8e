//! Domain events emitted by the Engine for render collaborators
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`, so subscribers always see a consistent view of
//! the state change.

use crate::state::Surface;
use embedform_core::SubmissionStatus;

/// State changes observable by rendering collaborators
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// The popup shell became visible
    PopupOpened,

    /// The popup shell collapsed
    PopupClosed,

    /// The visible surface changed (callout <-> form <-> nothing)
    SurfaceChanged { surface: Surface },

    /// The submission status changed; the form renderer re-reads it to
    /// choose between field list, thank-you view, and error feedback
    SubmissionStatusChanged { status: SubmissionStatus },
}
