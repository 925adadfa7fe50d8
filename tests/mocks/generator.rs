use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use yt_study::generation::Generator;
use yt_study::{Result, StudyError};

#[derive(Clone)]
pub struct MockGenerator {
    pub response: String,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response: String::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(StudyError::Generation(msg.clone()));
        }
        Ok(self.response.clone())
    }

    fn model(&self) -> &str {
        "mock-llm"
    }
}
