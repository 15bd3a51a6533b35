//! Browser transport to the BFHL service

use async_trait::async_trait;
use bfhl_console::application::transport::{
    health_url, parse_response_body, submit_url, BfhlTransport,
};
use bfhl_console::application::Controller;
use bfhl_console::domain::{HealthReply, RequestPayload, ResponseObject, TransportError};
use gloo_net::http::{Request, Response};

/// Fixed address of the BFHL service
pub const API_BASE_URL: &str = bfhl_console::application::DEFAULT_BASE_URL;

pub type UiController = Controller<GlooTransport>;

pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

/// A failed `fetch` surfaces as a JS error: nothing came back.
fn classify(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::JsError(js) => TransportError::NoResponse(js.to_string()),
        other => TransportError::Other(other.to_string()),
    }
}

async fn read_reply(response: Response) -> Result<String, TransportError> {
    if !response.ok() {
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Failed to read error body (status {}): {}", status, e);
                format!("Failed to read response body: {}", e)
            }
        };
        return Err(TransportError::Status { status, body });
    }
    response.text().await.map_err(classify)
}

#[async_trait(?Send)]
impl BfhlTransport for GlooTransport {
    async fn health(&self) -> Result<HealthReply, TransportError> {
        let response = Request::get(&health_url(&self.base_url))
            .send()
            .await
            .map_err(classify)?;

        let body = read_reply(response).await?;
        Ok(HealthReply::from_body(&body))
    }

    async fn submit(&self, payload: &RequestPayload) -> Result<ResponseObject, TransportError> {
        let response = Request::post(&submit_url(&self.base_url))
            .json(payload)
            .map_err(|e| TransportError::Other(format!("Failed to serialize body: {}", e)))?
            .send()
            .await
            .map_err(classify)?;

        let body = read_reply(response).await?;
        parse_response_body(&body)
    }
}
