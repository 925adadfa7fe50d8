//! Summarize and quiz commands - dispatch one request to the service.

use crate::cli::Output;
use crate::client::StudyClient;
use crate::config::Settings;
use crate::service::StudyTask;
use anyhow::{Context, Result};

/// Run the summarize or quiz command.
///
/// Failures are returned to `main`, which reports them once.
pub async fn run_study(
    task: StudyTask,
    url: &str,
    backend: Option<String>,
    settings: Settings,
) -> Result<()> {
    let backend = backend.unwrap_or_else(|| settings.client.backend_url.clone());
    let client = StudyClient::new(&backend)?;

    Output::video(url);

    let spinner = Output::task_spinner(task);
    let result = client.request(task, url).await;
    spinner.finish_and_clear();

    let text = result.with_context(|| format!("Failed to get {}", task))?;
    Output::success("Done!");
    Output::study_result(task, &text);
    Ok(())
}
