//! # embedform-gateway - Side-Effect Gateway
//!
//! The widgets API client for Embedform. Every backend side effect the
//! controller can trigger lives behind the [`FormGateway`] trait:
//!
//! - `connect` - fetch the integration + form bundle once at startup
//! - `save_form` - persist a submission, returning status and field errors
//! - `send_email` - queue user/admin notification mail (fire-and-forget)
//! - `increment_view_count` - bump the form's view counter (fire-and-forget)
//!
//! [`HttpGateway`] is the production implementation; tests inject
//! channel-backed fakes instead.

pub mod http;
pub mod settings;
pub mod types;

mod gateway;

pub use gateway::{FormGateway, LocalFormGateway};
pub use http::HttpGateway;
pub use settings::GatewaySettings;
pub use types::{ConnectRequest, ConnectResponse, EmailParams, SaveFormRequest, SaveFormResponse};
