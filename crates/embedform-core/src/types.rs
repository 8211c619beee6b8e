//! Domain types for the widget integration and form model

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────
// Integration Configuration
// ─────────────────────────────────────────────────────────

/// Widget presentation mode selected by the integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum LoadType {
    /// One-shot overlay opened on load or by a host-page trigger
    Popup,
    /// Persistent compact widget with a circular toggle control
    Shoutbox,
    /// Rendered inline inside the host page content
    #[default]
    Embedded,
    /// Attached below a host-page element
    Dropdown,
    /// Slides in from the left edge
    SlideInLeft,
    /// Slides in from the right edge
    SlideInRight,
}

impl LoadType {
    /// Modes other than popup/shoutbox behave identically in the
    /// controller: the widget is shown immediately on initialize.
    pub fn is_inline(&self) -> bool {
        !matches!(self, LoadType::Popup | LoadType::Shoutbox)
    }
}

/// Teaser prompt shown before the full form
///
/// Absent entirely when the integration has no callout configured, in
/// which case the form is always shown directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Callout {
    /// Bypass the callout and show the form directly
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub feature_image: Option<String>,
}

/// Form-related settings of an integration (`formData` in the API)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    pub load_type: LoadType,
    #[serde(default)]
    pub callout: Option<Callout>,
    #[serde(default)]
    pub from_email: Option<String>,
    #[serde(default)]
    pub user_email_title: Option<String>,
    #[serde(default)]
    pub user_email_content: Option<String>,
    #[serde(default)]
    pub admin_emails: Vec<String>,
    #[serde(default)]
    pub admin_email_title: Option<String>,
    #[serde(default)]
    pub admin_email_content: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub thank_content: Option<String>,
}

/// An installed widget integration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub form_data: FormSettings,
}

// ─────────────────────────────────────────────────────────
// Form Definition & Submission Payload
// ─────────────────────────────────────────────────────────

/// A single field definition in a form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub order: i32,
}

/// Form definition fetched with the integration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub button_text: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

/// A submitted value for one form field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    pub field_id: String,
    /// Field type the value was entered for (`input`, `email`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    /// Label shown to the user, echoed back for admin emails
    pub text: String,
    pub value: String,
}

/// A complete user submission of the form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FormDoc {
    pub values: Vec<FieldValue>,
    #[serde(default)]
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

// ─────────────────────────────────────────────────────────
// Browser Info
// ─────────────────────────────────────────────────────────

/// Ambient browser data collected by the loader script
///
/// Forwarded unmodified with every submission; the controller never
/// inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

// ─────────────────────────────────────────────────────────
// Config Snapshot
// ─────────────────────────────────────────────────────────

/// Immutable integration bundle the controller reads once at startup
///
/// Constructed before the controller exists and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigSnapshot {
    pub integration: Integration,
    pub form: Form,
    /// True when the host page registered its own popup trigger, meaning
    /// the widget must not auto-open on load.
    #[serde(default)]
    pub has_popup_handlers: bool,
    #[serde(default)]
    pub browser_info: BrowserInfo,
}

impl ConfigSnapshot {
    pub fn form_settings(&self) -> &FormSettings {
        &self.integration.form_data
    }

    pub fn load_type(&self) -> LoadType {
        self.integration.form_data.load_type
    }

    pub fn callout(&self) -> Option<&Callout> {
        self.integration.form_data.callout.as_ref()
    }
}

// ─────────────────────────────────────────────────────────
// Submission Status
// ─────────────────────────────────────────────────────────

/// A validation or save error for one submitted field
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[serde(default)]
    pub field_id: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    pub text: String,
}

impl FieldError {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            field_id: None,
            code: None,
            text: text.into(),
        }
    }

    pub fn for_field(field_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            field_id: Some(field_id.into()),
            code: None,
            text: text.into(),
        }
    }
}

/// Result of the most recent submission attempt
///
/// Orthogonal to surface visibility: only the form renderer consults it to
/// choose between the field list, the thank-you view, and error feedback.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// No submission attempted since mount (or since the last reset)
    #[default]
    Initial,
    /// The backend accepted the submission
    Success,
    /// The backend rejected the submission (field errors passed through
    /// verbatim) or the transport failed
    Error(Vec<FieldError>),
}

impl SubmissionStatus {
    pub fn is_initial(&self) -> bool {
        matches!(self, SubmissionStatus::Initial)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            SubmissionStatus::Error(errors) => errors,
            _ => &[],
        }
    }
}
