//! Terminal output for the CLI: status lines, the video links and the
//! generated study text.

use crate::service::StudyTask;
use crate::transcript::VideoId;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Warnings and errors go to stderr so the study text can be piped.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Show where the video can be watched, or warn that the link will
    /// likely be rejected.
    pub fn video(url: &str) {
        match VideoId::parse(url) {
            Some(video) => {
                Self::kv("Video", &video.watch_url());
                Self::kv("Embed", &video.embed_url());
            }
            None => Self::warning("This does not look like a YouTube link; the server may reject it."),
        }
    }

    /// Print generated text under the task's title.
    pub fn study_result(task: StudyTask, text: &str) {
        Self::header(Self::task_title(task));
        println!("{}\n", text.trim_end());
    }

    pub fn task_title(task: StudyTask) -> &'static str {
        match task {
            StudyTask::Summary => "3줄 요약",
            StudyTask::Quiz => "OX 퀴즈",
        }
    }

    /// Spinner shown while the service works on a task.
    pub fn task_spinner(task: StudyTask) -> ProgressBar {
        Self::spinner(match task {
            StudyTask::Summary => "Analyzing...",
            StudyTask::Quiz => "Writing quiz...",
        })
    }

    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}
