//! Serve command - run the HTTP service.

use crate::api;
use crate::cli::preflight;
use crate::cli::Output;
use crate::config::Settings;
use crate::generation::{build_generator, Generator};
use crate::service::StudyService;
use crate::transcript::YoutubeTranscriptSource;
use std::sync::Arc;
use tracing::{info, warn};

/// Run the HTTP API server.
pub async fn run_serve(host: Option<String>, port: Option<u16>, settings: Settings) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);

    let generator = load_generator(&settings)?;

    if let Err(e) = preflight::check_tool(&settings.transcript.ytdlp_path) {
        warn!("{}", e);
    }

    let source = Arc::new(YoutubeTranscriptSource::new(&settings.transcript)?);
    let service = StudyService::new(source, generator);
    let app = api::router(service);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    Output::header("yt-study API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    Output::kv("Provider", &format!("{} ({})", settings.generation.provider, settings.generation.model));
    println!();
    println!("Endpoints:");
    Output::kv("Liveness", "GET  /");
    Output::kv("Summarize", "POST /summarize");
    Output::kv("Quiz", "POST /quiz");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}

/// Read the credential and build the generator. The credential is read once
/// here and never again; a missing one is reported a single time.
fn load_generator(settings: &Settings) -> anyhow::Result<Option<Arc<dyn Generator>>> {
    match preflight::check_api_key(settings) {
        Ok(key) => Ok(Some(build_generator(&settings.generation, &key)?)),
        Err(e) => {
            warn!("{}", e);
            Ok(None)
        }
    }
}
