//! Widget state (Model in TEA pattern)

use std::sync::Arc;

use embedform_core::{ConfigSnapshot, Form, FormSettings, Integration, SubmissionStatus};

/// The surface currently shown to the visitor
///
/// Callout and form are mutually exclusive in steady state; `None` occurs
/// before initialization and after a full collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    #[default]
    None,
    Callout,
    Form,
}

/// Mutable controller state, one instance per widget mount
///
/// Mutated only by [`crate::handler::update`]; everything else reads.
#[derive(Debug, Clone)]
pub struct WidgetState {
    config: Arc<ConfigSnapshot>,

    /// Outer overlay shell; only meaningful for popup load type
    pub is_popup_visible: bool,
    pub is_form_visible: bool,
    pub is_callout_visible: bool,

    /// Outcome of the latest submission; orthogonal to visibility
    pub current_status: SubmissionStatus,
}

impl WidgetState {
    pub fn new(config: Arc<ConfigSnapshot>) -> Self {
        Self {
            config,
            is_popup_visible: false,
            is_form_visible: false,
            is_callout_visible: false,
            current_status: SubmissionStatus::Initial,
        }
    }

    pub fn config(&self) -> &ConfigSnapshot {
        &self.config
    }

    pub fn integration(&self) -> &Integration {
        &self.config.integration
    }

    pub fn form(&self) -> &Form {
        &self.config.form
    }

    pub fn form_settings(&self) -> &FormSettings {
        &self.config.integration.form_data
    }

    pub fn visible_surface(&self) -> Surface {
        if self.is_form_visible {
            Surface::Form
        } else if self.is_callout_visible {
            Surface::Callout
        } else {
            Surface::None
        }
    }

    /// Collapse every surface, keeping the submission status
    pub fn hide_all(&mut self) {
        self.is_popup_visible = false;
        self.is_callout_visible = false;
        self.is_form_visible = false;
    }
}
