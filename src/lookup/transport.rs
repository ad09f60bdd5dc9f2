//! # HTTP Transport
//!
//! Issues exactly one GET per cycle and folds every way it can go wrong into
//! a single [`LookupResult::Failure`]. No retries, no timeout, no cancellation.

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::error::LookupError;
use super::request::RequestDescriptor;
use super::result::LookupResult;

/// Thin wrapper around a shared `reqwest::Client`
///
/// Cloning is cheap; every spawned cycle gets its own handle.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        tracing::debug!("HttpTransport created");
        Ok(Self { client })
    }

    /// Run one request to completion
    pub async fn fetch(&self, descriptor: &RequestDescriptor) -> LookupResult {
        self.fetch_json(descriptor).await.into()
    }

    async fn fetch_json(&self, descriptor: &RequestDescriptor) -> Result<Value, LookupError> {
        tracing::debug!("GET {}", descriptor.url());

        let response = self
            .client
            .get(descriptor.url().clone())
            .headers(descriptor.headers().clone())
            .send()
            .await
            .map_err(|e| LookupError::transport(&e))?;

        let status = response.status();
        tracing::debug!("GET {} -> {}", descriptor.url(), status);

        if !status.is_success() {
            // A body that cannot be read is treated like one that cannot be parsed
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!("Failed to read {} error body: {}", status, err);
                    String::new()
                }
            };
            return Err(LookupError::HttpStatus {
                status: status.as_u16(),
                details: error_details(status, &body),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| LookupError::transport(&e))
    }
}

/// Best diagnostic text for an error response
///
/// Prefers a `message` field, then the whole JSON body, then the reason phrase.
pub(crate) fn error_details(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => match value.get("message").and_then(Value::as_str) {
            Some(message) => message.to_string(),
            None => serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()),
        },
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}
