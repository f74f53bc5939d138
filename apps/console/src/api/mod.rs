use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{header, Method, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::models::BaselineRow;

pub type ClientResult<T> = Result<T, ClientError>;

/// The two backend operations the dashboard depends on.
///
/// Futures are not `Send`: everything runs on the UI event loop.
#[async_trait(?Send)]
pub trait DataSource {
    async fn fetch_baseline_stats(&self) -> ClientResult<Vec<BaselineRow>>;

    async fn run_analysis(&self, payload: &str) -> ClientResult<String>;
}

#[derive(Clone)]
pub struct IdsClient {
    inner: reqwest::Client,
    config: Arc<AppConfig>,
    base_url: String,
}

impl IdsClient {
    pub fn new(config: AppConfig) -> ClientResult<Self> {
        let base_url = config.endpoint().to_string();

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);

        let client = builder.build().context("failed to build reqwest client")?;

        Ok(Self {
            inner: client,
            config: Arc::new(config),
            base_url,
        })
    }

    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Reads the backend liveness line from `GET /status`.
    pub async fn check_status(&self) -> ClientResult<String> {
        let response = self.request(Method::GET, "status").send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.is_success() {
            Ok(text.trim().to_string())
        } else {
            Err(ClientError::Status { status, body: text })
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.join_path(path);
        debug!(%method, %url, "ids request");
        self.inner.request(method, url)
    }

    fn join_path(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait(?Send)]
impl DataSource for IdsClient {
    async fn fetch_baseline_stats(&self) -> ClientResult<Vec<BaselineRow>> {
        let response = self
            .request(Method::GET, "baseline")
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            warn!(%status, "baseline request rejected");
            return Err(ClientError::Status {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let rows: Vec<BaselineRow> = serde_json::from_slice(&bytes)?;
        debug!(rows = rows.len(), "baseline decoded");
        Ok(rows)
    }

    async fn run_analysis(&self, payload: &str) -> ClientResult<String> {
        let response = self
            .request(Method::POST, "analyze")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(payload.to_owned())
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        // The backend reports analysis failures as readable text; surface it as-is.
        if !status.is_success() {
            warn!(%status, "analysis endpoint returned non-success status");
        }

        Ok(text)
    }
}

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Build(#[from] anyhow::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// Network, connection and non-success status failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
