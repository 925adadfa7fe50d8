//! Client for a running yt-study service.
//!
//! Each call is a single blocking request; there is no queueing, retry or
//! cancellation.

use crate::api::{ErrorBody, LivenessResponse, VideoRequest};
use crate::service::StudyTask;
use anyhow::{anyhow, bail, Context, Result};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// HTTP client for the study service.
pub struct StudyClient {
    http: reqwest::Client,
    base_url: Url,
}

impl StudyClient {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url.trim())
            .with_context(|| format!("Invalid backend URL: {}", base_url))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            bail!("Backend URL must be http(s): {}", base_url);
        }
        // Endpoints are joined onto the base, which drops a last segment
        // without a trailing slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(300))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .with_context(|| format!("Invalid endpoint path: {}", path))
    }

    /// Query the liveness endpoint and return its message.
    pub async fn status(&self) -> Result<String> {
        let response = self
            .http
            .get(self.base_url.clone())
            .send()
            .await
            .context("Failed to reach server")?;

        if !response.status().is_success() {
            bail!("Server returned {}", response.status());
        }

        let body: LivenessResponse = response
            .json()
            .await
            .context("Failed to parse server status")?;
        Ok(body.message)
    }

    /// Ask the service for a summary of a video.
    pub async fn summarize(&self, url: &str) -> Result<String> {
        self.request(StudyTask::Summary, url).await
    }

    /// Ask the service for a quiz on a video.
    pub async fn quiz(&self, url: &str) -> Result<String> {
        self.request(StudyTask::Quiz, url).await
    }

    /// Issue one task request and return the generated text.
    ///
    /// Any non-success status is an error carrying the server's `detail`.
    pub async fn request(&self, task: StudyTask, url: &str) -> Result<String> {
        let endpoint = self.endpoint(task.path())?;
        debug!("POST {}", endpoint);

        let response = self
            .http
            .post(endpoint)
            .json(&VideoRequest {
                url: url.to_string(),
            })
            .send()
            .await
            .context("Request failed")?;

        let status = response.status();
        let body = response.text().await.context("Failed to read response")?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.detail)
                .unwrap_or_else(|_| body.trim().to_string());
            if detail.is_empty() {
                bail!("Server returned {}", status);
            }
            bail!("Server returned {}: {}", status, detail);
        }

        let json: serde_json::Value =
            serde_json::from_str(&body).context("Failed to parse response")?;
        json.get(task.as_str())
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow!("Response is missing the '{}' field", task.as_str()))
    }
}
