use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use yt_study::transcript::{Transcript, TranscriptSource};
use yt_study::{Result, StudyError};

#[derive(Clone)]
pub struct MockTranscriptSource {
    pub text: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockTranscriptSource {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            text: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptSource for MockTranscriptSource {
    async fn fetch(&self, url: &str) -> Result<Transcript> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(StudyError::TranscriptUnavailable(msg.clone()));
        }
        Ok(Transcript::new("dQw4w9WgXcQ", self.text.clone()))
    }
}
