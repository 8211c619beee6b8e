//! Request/response shapes for the widgets API

use serde::{Deserialize, Serialize};

use embedform_core::{BrowserInfo, FieldError, Form, FormDoc, Integration};

/// Wire status for an accepted submission
pub const STATUS_OK: &str = "ok";

/// Handshake request sent once before the controller exists
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub brand_code: String,
    pub form_code: String,
    #[serde(default)]
    pub cached_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Integration bundle returned by the handshake
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectResponse {
    pub integration: Integration,
    pub form: Form,
}

/// Persist-a-submission request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormRequest {
    pub integration_id: String,
    pub form_id: String,
    pub doc: FormDoc,
    pub browser_info: BrowserInfo,
}

/// Submission outcome from the backend
///
/// `status == "ok"` means accepted; anything else carries field errors
/// the renderer shows verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormResponse {
    pub status: String,
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
    #[serde(default)]
    pub message_id: Option<String>,
}

impl SaveFormResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
            errors: None,
            message_id: None,
        }
    }

    pub fn failed(errors: Vec<FieldError>) -> Self {
        Self {
            status: "failed".to_string(),
            errors: Some(errors),
            message_id: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Outbound notification mail parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmailParams {
    pub to_emails: Vec<String>,
    #[serde(default)]
    pub from_email: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
