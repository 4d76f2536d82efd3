//! Fetch abstraction over the name service.
//!
//! This module defines the `NameSource` trait to abstract the bulk fetch,
//! enabling testability with mock implementations.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::FETCH_TIMEOUT;

/// Trait for fetching one raw batch from the name service.
///
/// A batch is the plain response body: newline-separated UTF-8 values.
/// Parsing is the pump's job; implementations only move bytes.
#[async_trait]
pub trait NameSource: Send + Sync {
    /// Fetch the raw batch body from `url`.
    ///
    /// # Errors
    /// Returns an error if the request fails due to network issues, times
    /// out, or the service answers with a non-success status.
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[async_trait]
impl<S: NameSource + ?Sized> NameSource for std::sync::Arc<S> {
    async fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url).await
    }
}

// ============================================================================
// Production implementation using reqwest
// ============================================================================

/// Production name source using reqwest.
#[derive(Debug, Clone)]
pub struct HttpNameSource {
    client: reqwest::Client,
}

impl HttpNameSource {
    /// Create a new reqwest-based name source.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpNameSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NameSource for HttpNameSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url = %url, "fetching name batch");

        let response = self
            .client
            .get(url)
            .timeout(FETCH_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(url = %url, error = %e, "name batch fetch failed");
                e
            })?
            .error_for_status()?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(
            url = %url,
            status = status,
            body_len = body.len(),
            "name batch fetch completed"
        );

        Ok(body)
    }
}

// ============================================================================
// Test/mock implementation
// ============================================================================

use parking_lot::Mutex;
use std::collections::HashMap;

/// Mock name source for testing.
///
/// Allows configuring predetermined batch bodies per URL without making
/// actual HTTP calls. Responses for the same URL are served in FIFO order.
#[derive(Default)]
pub struct MockNameSource {
    responses: Mutex<HashMap<String, Vec<Result<String>>>>,
    calls: Mutex<Vec<String>>,
}

impl MockNameSource {
    /// Create a new mock name source with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body (or failure) for `url`.
    pub fn add_response(&self, url: &str, response: Result<String>) {
        self.responses
            .lock()
            .entry(url.to_string())
            .or_default()
            .push(response);
    }

    /// URLs of all fetches made so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    /// Number of fetches made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl NameSource for MockNameSource {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.calls.lock().push(url.to_string());

        let mut responses = self.responses.lock();
        if let Some(queue) = responses.get_mut(url) {
            if !queue.is_empty() {
                return queue.remove(0);
            }
        }

        Err(crate::error::NameError::Internal(format!(
            "no mock response configured for {url}"
        )))
    }
}
