//! Native transport to the BFHL service, built on reqwest

use std::time::Duration;

use async_trait::async_trait;

use crate::application::transport::{health_url, parse_response_body, submit_url, BfhlTransport};
use crate::config::ApiSettings;
use crate::domain::{HealthReply, RequestPayload, ResponseObject, TransportError};

pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_settings(api: &ApiSettings) -> Result<Self, reqwest::Error> {
        Self::new(api.base_url.clone(), Duration::from_secs(api.timeout_seconds))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_reply(response: reqwest::Response) -> Result<String, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(
                        status = status.as_u16(),
                        error = %e,
                        "Failed to read error body"
                    );
                    format!("Failed to read response body: {}", e)
                }
            };
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response.text().await.map_err(classify)
    }
}

/// Connection failures and timeouts mean no response was received.
fn classify(err: reqwest::Error) -> TransportError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        TransportError::NoResponse(err.to_string())
    } else {
        TransportError::Other(err.to_string())
    }
}

#[async_trait(?Send)]
impl BfhlTransport for ReqwestTransport {
    async fn health(&self) -> Result<HealthReply, TransportError> {
        let response = self
            .client
            .get(health_url(&self.base_url))
            .send()
            .await
            .map_err(classify)?;

        let body = Self::read_reply(response).await?;
        Ok(HealthReply::from_body(&body))
    }

    async fn submit(&self, payload: &RequestPayload) -> Result<ResponseObject, TransportError> {
        let response = self
            .client
            .post(submit_url(&self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(classify)?;

        let body = Self::read_reply(response).await?;
        parse_response_body(&body)
    }
}
