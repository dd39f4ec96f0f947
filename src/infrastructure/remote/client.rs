//! Thin JSON client for the marketplace REST backend.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, warn};
use url::Url;

use crate::error::AppError;

/// Failures talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("backend URL {0} cannot carry path segments")]
    InvalidBaseUrl(String),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("backend returned HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("invalid record {id}: {message}")]
    InvalidRecord { id: String, message: String },
}

impl From<RemoteError> for AppError {
    fn from(e: RemoteError) -> Self {
        match &e {
            RemoteError::Client(_) | RemoteError::InvalidBaseUrl(_) => {
                AppError::internal("Backend client misconfigured", json!({ "reason": e.to_string() }))
            }
            RemoteError::Request { source, .. } if source.is_timeout() => AppError::upstream(
                "Backend request timed out",
                json!({ "reason": e.to_string() }),
            ),
            _ => AppError::upstream("Backend request failed", json!({ "reason": e.to_string() })),
        }
    }
}

/// JSON-over-HTTP client with a fixed per-request timeout.
///
/// A single pooled [`reqwest::Client`] is built once and reused. Requests
/// are never retried here; a failed call surfaces to the caller.
#[derive(Debug, Clone)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: Url,
}

impl RestClient {
    /// Creates a client rooted at `base_url` (e.g. `https://api.example.com/api/v1`).
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::InvalidBaseUrl`] for URLs that cannot have
    /// path segments appended, or [`RemoteError::Client`] if the TLS backend
    /// fails to initialise.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, RemoteError> {
        if base_url.cannot_be_a_base() {
            return Err(RemoteError::InvalidBaseUrl(base_url.to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(RemoteError::Client)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `base_url/seg1/seg2/...`, percent-encoding every segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GETs a JSON document.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))` on a 2xx response with a decodable body
    /// - `Ok(None)` on 404
    ///
    /// # Errors
    ///
    /// Transport failures, timeouts, other non-success statuses and
    /// undecodable bodies.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> Result<Option<T>, RemoteError> {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|source| RemoteError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            debug!("GET {} -> 404", url);
            return Ok(None);
        }
        if !status.is_success() {
            warn!("GET {} -> {}", url, status);
            return Err(RemoteError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| RemoteError::Request {
                url: url.to_string(),
                source,
            })?;

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|e| RemoteError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            })
    }

    /// Returns true if the backend answers HTTP at all.
    ///
    /// Any status counts as reachable; only transport errors and timeouts
    /// do not.
    pub async fn ping(&self) -> bool {
        match self.http.get(self.base_url.clone()).send().await {
            Ok(_) => true,
            Err(e) => {
                warn!("Backend ping failed: {}", e);
                false
            }
        }
    }
}
