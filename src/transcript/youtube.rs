//! YouTube transcript source.

use super::captions::{parse_json3, select_track, CaptionListing};
use super::{Transcript, TranscriptSource, VideoId};
use crate::config::TranscriptSettings;
use crate::error::{Result, StudyError};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Fetches caption text of YouTube videos via yt-dlp.
pub struct YoutubeTranscriptSource {
    http: reqwest::Client,
    ytdlp_path: String,
    languages: Vec<String>,
}

impl YoutubeTranscriptSource {
    pub fn new(settings: &TranscriptSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            ytdlp_path: settings.ytdlp_path.clone(),
            languages: settings.languages.clone(),
        })
    }

    /// List caption tracks using yt-dlp.
    async fn fetch_listing(&self, video: &VideoId) -> Result<CaptionListing> {
        let url = video.watch_url();

        let output = tokio::process::Command::new(&self.ytdlp_path)
            .args([
                "--dump-json",
                "--skip-download",
                "--no-playlist",
                "--no-warnings",
                &url,
            ])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    StudyError::ToolNotFound(self.ytdlp_path.clone())
                } else {
                    StudyError::ToolFailed(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StudyError::TranscriptUnavailable(format!(
                "Video {} not found or unavailable: {}",
                video,
                stderr.trim()
            )));
        }

        let listing: CaptionListing = serde_json::from_slice(&output.stdout).map_err(|e| {
            StudyError::ToolFailed(format!("Failed to parse yt-dlp output: {}", e))
        })?;

        Ok(listing)
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<Transcript> {
        let video = VideoId::parse(url).ok_or_else(|| StudyError::InvalidUrl(url.to_string()))?;

        let listing = self.fetch_listing(&video).await?;
        if let Some(title) = &listing.title {
            debug!("Video title: {}", title);
        }

        let track = select_track(&listing, &self.languages).ok_or_else(|| {
            StudyError::TranscriptUnavailable(format!(
                "No captions in [{}] for video {}",
                self.languages.join(", "),
                video
            ))
        })?;

        debug!(
            "Using {} caption track '{}'",
            if track.generated { "generated" } else { "manual" },
            track.language
        );

        let payload = self
            .http
            .get(&track.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let text = parse_json3(&payload)?;
        if text.is_empty() {
            return Err(StudyError::TranscriptUnavailable(format!(
                "Caption track '{}' for video {} is empty",
                track.language, video
            )));
        }

        info!("Fetched transcript for {} ({} chars)", video, text.chars().count());

        Ok(Transcript {
            video_id: video.as_str().to_string(),
            language: track.language,
            generated: track.generated,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_rejected_before_any_call() {
        let settings = TranscriptSettings {
            ytdlp_path: "/nonexistent/yt-dlp".to_string(),
            ..Default::default()
        };
        let source = YoutubeTranscriptSource::new(&settings).unwrap();

        let err = source.fetch("https://example.com/video").await.unwrap_err();
        assert!(matches!(err, StudyError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_missing_ytdlp_reported() {
        let settings = TranscriptSettings {
            ytdlp_path: "/nonexistent/yt-dlp".to_string(),
            ..Default::default()
        };
        let source = YoutubeTranscriptSource::new(&settings).unwrap();

        let err = source.fetch("dQw4w9WgXcQ").await.unwrap_err();
        assert!(matches!(err, StudyError::ToolNotFound(_)));
        assert!(err.is_retrieval());
    }
}
