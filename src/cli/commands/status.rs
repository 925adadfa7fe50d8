//! Status command - check that the service is reachable.

use crate::cli::Output;
use crate::client::StudyClient;
use crate::config::Settings;
use anyhow::{Context, Result};

/// Run the status command.
pub async fn run_status(backend: Option<String>, settings: Settings) -> Result<()> {
    let backend = backend.unwrap_or_else(|| settings.client.backend_url.clone());
    let client = StudyClient::new(&backend)?;

    Output::kv("Server", client.base_url().as_str());

    let message = client.status().await.context("Server connection failed")?;
    Output::success("Server connected");
    Output::kv("Message", &message);
    Ok(())
}
