//! yt-study - video summaries and quizzes
//!
//! A small HTTP service that fetches a YouTube video's captions, hands them to
//! a hosted language model with one of two fixed prompts, and returns the text.
//! The same binary doubles as a command-line client for the service.
//!
//! # Architecture
//!
//! - `config` - Settings and the two prompt templates
//! - `transcript` - Caption retrieval (yt-dlp listing + json3 download)
//! - `generation` - Text generation (Gemini, OpenAI)
//! - `service` - Fetch, cap, prompt, generate
//! - `api` - axum router
//! - `client` - HTTP client for a running service
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use yt_study::config::Settings;
//! use yt_study::generation::build_generator;
//! use yt_study::service::StudyService;
//! use yt_study::transcript::YoutubeTranscriptSource;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let key = settings.generation.read_api_key();
//!     let generator = key
//!         .map(|k| build_generator(&settings.generation, &k))
//!         .transpose()?;
//!     let source = Arc::new(YoutubeTranscriptSource::new(&settings.transcript)?);
//!     let service = StudyService::new(source, generator);
//!
//!     println!("{}", service.summarize("https://youtu.be/dQw4w9WgXcQ").await?);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod generation;
pub mod service;
pub mod transcript;

pub use error::{Result, StudyError};
