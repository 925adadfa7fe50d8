//! Transcript retrieval.
//!
//! A [`TranscriptSource`] turns a video link into caption text. The service
//! only ever sees the first [`MAX_TRANSCRIPT_CHARS`] characters of it.

mod captions;
mod video_id;
mod youtube;

pub use captions::{parse_json3, select_track, CaptionFormat, CaptionListing, CaptionTrack};
pub use video_id::VideoId;
pub use youtube::YoutubeTranscriptSource;

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Maximum number of transcript characters forwarded to generation.
pub const MAX_TRANSCRIPT_CHARS: usize = 10_000;

/// Caption text of one video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Video the captions belong to.
    pub video_id: String,
    /// Language code of the chosen caption track.
    pub language: String,
    /// Whether the track was auto-generated by speech recognition.
    pub generated: bool,
    /// Flattened caption text.
    pub text: String,
}

impl Transcript {
    pub fn new(video_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            language: String::new(),
            generated: false,
            text: text.into(),
        }
    }

    /// Number of characters in the full text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// The text cut to at most [`MAX_TRANSCRIPT_CHARS`] characters.
    pub fn capped(&self) -> &str {
        truncate_chars(&self.text, MAX_TRANSCRIPT_CHARS)
    }
}

/// Trait for transcript providers.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the transcript for a video link.
    async fn fetch(&self, url: &str) -> Result<Transcript>;
}

/// Cut `text` to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("", 10), "");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "안녕하세요";
        assert_eq!(truncate_chars(text, 2), "안녕");
        assert_eq!(truncate_chars(text, 0), "");
    }

    #[test]
    fn test_capped_transcript() {
        let long = "가".repeat(MAX_TRANSCRIPT_CHARS + 500);
        let transcript = Transcript::new("dQw4w9WgXcQ", long);
        assert_eq!(transcript.char_count(), MAX_TRANSCRIPT_CHARS + 500);
        assert_eq!(transcript.capped().chars().count(), MAX_TRANSCRIPT_CHARS);
    }
}
