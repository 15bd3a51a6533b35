//! Port through which the controller reaches the remote BFHL service

use async_trait::async_trait;
use crate::domain::payload::parse_json;
use crate::domain::{HealthReply, RequestPayload, ResponseObject, TransportError};

/// Base URL of the remote service
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Path of the processing endpoint, relative to the base URL
pub const SUBMIT_PATH: &str = "/bfhl";

/// Transport to the remote service.
///
/// Futures are not required to be `Send`: the browser implementation holds
/// JS values across await points.
#[async_trait(?Send)]
pub trait BfhlTransport {
    /// `GET <base>/`
    async fn health(&self) -> Result<HealthReply, TransportError>;

    /// `POST <base>/bfhl` with the payload as JSON body
    async fn submit(&self, payload: &RequestPayload) -> Result<ResponseObject, TransportError>;
}

pub fn health_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}

pub fn submit_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), SUBMIT_PATH)
}

/// Interpret the body of a 2xx submit reply
pub fn parse_response_body(body: &str) -> Result<ResponseObject, TransportError> {
    let value = parse_json(body)
        .map_err(|e| TransportError::Other(format!("Failed to parse response: {}", e)))?;
    ResponseObject::from_value(value)
        .ok_or_else(|| TransportError::Other("Response body is not a JSON object".to_string()))
}
