//! Retrieval-and-generation pipeline.
//!
//! One call fetches a transcript, caps it, fills a template and asks the
//! generator once. Nothing is cached between calls.

use crate::config::Prompts;
use crate::error::{Result, StudyError};
use crate::generation::Generator;
use crate::transcript::TranscriptSource;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};

/// What to produce from a transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyTask {
    Summary,
    Quiz,
}

impl StudyTask {
    /// Response field name and display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyTask::Summary => "summary",
            StudyTask::Quiz => "quiz",
        }
    }

    /// HTTP path of the endpoint serving this task.
    pub fn path(&self) -> &'static str {
        match self {
            StudyTask::Summary => "/summarize",
            StudyTask::Quiz => "/quiz",
        }
    }
}

impl std::fmt::Display for StudyTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transcript source plus an optional generator.
///
/// The generator is `None` when no credential was configured at startup.
pub struct StudyService {
    source: Arc<dyn TranscriptSource>,
    generator: Option<Arc<dyn Generator>>,
    prompts: Prompts,
}

impl StudyService {
    pub fn new(source: Arc<dyn TranscriptSource>, generator: Option<Arc<dyn Generator>>) -> Self {
        Self {
            source,
            generator,
            prompts: Prompts::default(),
        }
    }

    /// Whether a credential was loaded.
    pub fn has_credential(&self) -> bool {
        self.generator.is_some()
    }

    /// Run one task for a video link.
    #[instrument(skip(self))]
    pub async fn run(&self, task: StudyTask, url: &str) -> Result<String> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(StudyError::MissingCredential)?;

        let transcript = self.source.fetch(url).await?;
        let capped = transcript.capped();

        info!(
            "Generating {} for {} with {} ({} of {} chars)",
            task,
            transcript.video_id,
            generator.model(),
            capped.chars().count(),
            transcript.char_count()
        );

        let prompt = self.prompts.build(task, capped);
        generator.generate(&prompt).await
    }

    pub async fn summarize(&self, url: &str) -> Result<String> {
        self.run(StudyTask::Summary, url).await
    }

    pub async fn quiz(&self, url: &str) -> Result<String> {
        self.run(StudyTask::Quiz, url).await
    }
}
