//! JSON request client
//!
//! Every API call goes through [`RequestClient::send`]: one request, JSON in
//! and out, and a [`RequestFailure`] for anything but a 2xx response.

use std::time::Duration;

use log::debug;
use reqwest::{Client as HttpClient, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, RequestFailure, Result};

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin JSON-over-HTTP client
#[derive(Debug, Clone)]
pub struct RequestClient {
    http: HttpClient,
}

impl RequestClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(RequestFailure::from)?;
        Ok(Self { http })
    }

    /// Perform one request and return the parsed JSON body.
    ///
    /// A 2xx response with an empty body yields `Value::Null`. Any other
    /// status becomes a failure carrying the body's `message` (or `error`)
    /// field, or the generic message when there is none.
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> std::result::Result<Value, RequestFailure> {
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method.clone(), url)
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!("{} {} -> {}", method, url, status.as_u16());

        if !status.is_success() {
            return Err(RequestFailure::from_body(status.as_u16(), &text));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            RequestFailure::new(Some(status.as_u16()), format!("Invalid response: {}", e))
        })
    }

    /// Perform one request and decode the body into `T`.
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        let value = self.send(method, url, body).await?;
        serde_json::from_value(value)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into())
    }
}
