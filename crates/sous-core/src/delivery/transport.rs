//! Outbound webhook transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::error::{TransportError, with_causes};

/// Sends one JSON body to a URL and reports the HTTP status
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    /// POST `body` as `application/json`.
    ///
    /// `body` is sent byte for byte; callers measure it before handing it over.
    async fn post_json(&self, url: &str, body: String) -> Result<u16, TransportError>;
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport. With no timeout, the caller's own request deadline
    /// is the only bound.
    pub fn new(timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| {
                TransportError::new(with_causes(
                    format!("Failed to create HTTP client: {}", e),
                    &e,
                ))
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookTransport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        Ok(response.status().as_u16())
    }
}
