//! Configuration module for yt-study.
//!
//! Handles loading application settings and holds the fixed prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, TRANSCRIPT_VAR};
pub use settings::{
    ClientSettings, GenerationProvider, GenerationSettings, ServerSettings, Settings,
    TranscriptSettings,
};
