//! Error types for yt-study.

use thiserror::Error;

/// Library-level error type for yt-study operations.
#[derive(Error, Debug)]
pub enum StudyError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid video URL: {0}")]
    InvalidUrl(String),

    #[error("Transcript unavailable: {0}")]
    TranscriptUnavailable(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("External tool failed: {0}")]
    ToolFailed(String),

    #[error("API Key가 설정되지 않았습니다.")]
    MissingCredential,

    #[error("Generation failed: {0}")]
    Generation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl StudyError {
    /// Whether this error came from fetching the transcript (as opposed to
    /// generating text from it).
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            StudyError::InvalidUrl(_)
                | StudyError::TranscriptUnavailable(_)
                | StudyError::ToolNotFound(_)
                | StudyError::ToolFailed(_)
                | StudyError::Http(_)
                | StudyError::Json(_)
        )
    }

    /// HTTP status code this error is reported with.
    pub fn status_code(&self) -> u16 {
        if self.is_retrieval() {
            400
        } else {
            500
        }
    }
}

/// Result type alias for yt-study operations.
pub type Result<T> = std::result::Result<T, StudyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(StudyError::InvalidUrl("x".into()).status_code(), 400);
        assert_eq!(StudyError::TranscriptUnavailable("x".into()).status_code(), 400);
        assert_eq!(StudyError::ToolNotFound("yt-dlp".into()).status_code(), 400);
        assert_eq!(StudyError::MissingCredential.status_code(), 500);
        assert_eq!(StudyError::Generation("boom".into()).status_code(), 500);
        assert_eq!(StudyError::Config("bad".into()).status_code(), 500);
    }

    #[test]
    fn test_missing_credential_message() {
        assert_eq!(
            StudyError::MissingCredential.to_string(),
            "API Key가 설정되지 않았습니다."
        );
    }
}
