//! HTTP implementation of the gateway

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use embedform_core::{Error, Result};

use crate::gateway::FormGateway;
use crate::settings::GatewaySettings;
use crate::types::{
    ConnectRequest, ConnectResponse, EmailParams, SaveFormRequest, SaveFormResponse,
};

/// Widgets API client backed by `reqwest`
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    settings: GatewaySettings,
}

impl HttpGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::http(e.to_string()))?;

        Ok(Self { client, settings })
    }

    /// POST a JSON body and decode a JSON response
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: serde::de::DeserializeOwned,
    {
        let url = self.settings.endpoint(path)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url.clone())
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(Error::response(format!("{} returned {}: {}", url, status, text)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::response(e.to_string()))
    }

    /// POST a JSON body, ignoring the response payload
    async fn post_ack<B>(&self, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + Sync,
    {
        let _ignored: serde_json::Value = self.post_json(path, body).await?;
        Ok(())
    }
}

impl FormGateway for HttpGateway {
    async fn connect(&self, request: ConnectRequest) -> Result<ConnectResponse> {
        self.post_json("widgets/connect", &request).await
    }

    async fn save_form(&self, request: SaveFormRequest) -> Result<SaveFormResponse> {
        self.post_json("widgets/save-form", &request).await
    }

    async fn send_email(&self, params: EmailParams) -> Result<()> {
        self.post_ack("widgets/send-email", &params).await
    }

    async fn increment_view_count(&self, form_id: &str) -> Result<()> {
        let body = serde_json::json!({ "formId": form_id });
        self.post_ack("widgets/increment-view-count", &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_gateway_construction() {
        let settings = GatewaySettings::new("https://api.example.com/").unwrap();
        assert!(HttpGateway::new(settings).is_ok());
    }

    #[tokio::test]
    async fn test_save_form_unreachable_endpoint_is_http_error() {
        // Port 9 (discard) with a tiny timeout fails fast without a server.
        let settings = GatewaySettings::new("http://127.0.0.1:9/")
            .unwrap()
            .with_timeout(std::time::Duration::from_millis(200));
        let gateway = HttpGateway::new(settings).unwrap();

        let result = gateway.increment_view_count("form-1").await;
        assert!(matches!(result, Err(Error::Http { .. })));
    }
}
