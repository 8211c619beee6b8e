//! The gateway trait every backend implementation satisfies

use embedform_core::Result;

use crate::types::{
    ConnectRequest, ConnectResponse, EmailParams, SaveFormRequest, SaveFormResponse,
};

/// Backend side effects available to the visibility controller
///
/// The controller treats every call as fire-and-forget: completions are
/// delivered back to it as messages, and only `save_form`'s outcome is
/// ever folded into controller state.
#[trait_variant::make(FormGateway: Send)]
pub trait LocalFormGateway {
    /// Fetch the integration + form bundle for a brand/form code pair
    async fn connect(&self, request: ConnectRequest) -> Result<ConnectResponse>;

    /// Persist a user submission
    async fn save_form(&self, request: SaveFormRequest) -> Result<SaveFormResponse>;

    /// Queue a notification email
    async fn send_email(&self, params: EmailParams) -> Result<()>;

    /// Bump the form's view counter
    async fn increment_view_count(&self, form_id: &str) -> Result<()>;
}
