//! Prompt templates for yt-study.
//!
//! There are exactly two templates, summary and quiz. Both are fixed Korean
//! text with a single `{{transcript}}` slot.

use crate::service::StudyTask;
use std::collections::HashMap;

/// Placeholder name substituted with the transcript.
pub const TRANSCRIPT_VAR: &str = "transcript";

const SUMMARY_TEMPLATE: &str = r#"다음 유튜브 영상의 자막 내용을 읽고, 핵심 내용을 3줄로 요약해줘.
반드시 한국어로 답변해줘.

자막 내용:
{{transcript}}
"#;

const QUIZ_TEMPLATE: &str = r#"다음 유튜브 영상의 자막 내용을 바탕으로, 내용을 이해했는지 확인할 수 있는 OX 퀴즈 3문제를 만들어줘.
정답과 해설도 같이 포함해줘.
반드시 한국어로 답변해줘.

형식:
Q1. (문제)
A1. (O/X) - (해설)

자막 내용:
{{transcript}}
"#;

/// The two prompt templates.
#[derive(Debug, Clone)]
pub struct Prompts {
    pub summary: &'static str,
    pub quiz: &'static str,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            summary: SUMMARY_TEMPLATE,
            quiz: QUIZ_TEMPLATE,
        }
    }
}

impl Prompts {
    /// Template for the given task.
    pub fn template(&self, task: StudyTask) -> &'static str {
        match task {
            StudyTask::Summary => self.summary,
            StudyTask::Quiz => self.quiz,
        }
    }

    /// Build the prompt for `task` with the transcript substituted.
    pub fn build(&self, task: StudyTask, transcript: &str) -> String {
        let mut vars = HashMap::new();
        vars.insert(TRANSCRIPT_VAR.to_string(), transcript.to_string());
        Self::render(self.template(task), &vars)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }
}
