//! Backend client — the single point of entry for calls to the recommendation/diff service.
//!
//! The service owns all matching, scoring and diff logic. This module forwards
//! the request body, checks that the reply decodes into the models, and hands
//! back the reply's JSON untouched. Replies that do not decode are rejected
//! rather than relayed.
//!
//! No retries: a failed call surfaces to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{DiffsResponse, Recommendation};

const DIFFS_PATH: &str = "/retrieve_diff";
const RECOMMENDATIONS_PATH: &str = "/recommendations";

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("backend response did not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A backend reply as received, plus the records it decoded into.
/// `raw` is what gets relayed; `records` only proves the shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Relayed<T> {
    pub raw: Value,
    pub records: T,
}

impl<T: DeserializeOwned> Relayed<T> {
    pub fn decode(raw: Value) -> Result<Self, BackendError> {
        let records = T::deserialize(&raw)?;
        Ok(Self { raw, records })
    }
}

/// The operations routes need from the backend. Implemented by `BackendClient`;
/// tests substitute a fake.
///
/// `body` is sent as-is; `FilterCriteria::to_body` builds one from typed criteria.
/// Carried in `AppState` as `Arc<dyn SchedulingBackend>`.
#[async_trait]
pub trait SchedulingBackend: Send + Sync {
    async fn fetch_diffs(&self, body: &Value) -> Result<Relayed<Vec<DiffsResponse>>, BackendError>;

    async fn fetch_recommendations(
        &self,
        body: &Value,
    ) -> Result<Relayed<Vec<Recommendation>>, BackendError>;
}

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// `base_url` must not end in `/`. Without a timeout, a hung backend
    /// blocks the request until the peer closes the connection.
    pub fn new(base_url: String, timeout: Option<Duration>) -> Result<Self, BackendError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> Result<Relayed<T>, BackendError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
            warn!("Backend {} returned {}: {}", path, status, text);
            return Err(BackendError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let text = response.text().await?;
        debug!("Backend {} responded with {} bytes", path, text.len());

        let raw: Value = serde_json::from_str(&text)?;
        Relayed::decode(raw)
    }
}

#[async_trait]
impl SchedulingBackend for BackendClient {
    async fn fetch_diffs(&self, body: &Value) -> Result<Relayed<Vec<DiffsResponse>>, BackendError> {
        info!(%body, "fetching diffs");
        let reply: Relayed<Vec<DiffsResponse>> = self.post_json(DIFFS_PATH, body).await?;

        for (i, diff) in reply.records.iter().enumerate() {
            if !diff.stats.anzahl.is_consistent() {
                warn!(
                    index = i,
                    anzahl = ?diff.stats.anzahl,
                    "diff totals do not add up"
                );
            }
        }

        Ok(reply)
    }

    async fn fetch_recommendations(
        &self,
        body: &Value,
    ) -> Result<Relayed<Vec<Recommendation>>, BackendError> {
        info!(%body, "fetching recommendations");
        self.post_json(RECOMMENDATIONS_PATH, body).await
    }
}
