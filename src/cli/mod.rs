//! CLI module for yt-study.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// yt-study - video summaries and quizzes
///
/// Runs the summary/quiz HTTP service, or talks to a running one.
#[derive(Parser, Debug)]
#[command(name = "yt-study")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP service
    Serve {
        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,

        /// Port to bind to
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Summarize a video in three lines
    Summarize {
        /// YouTube URL or video ID
        url: String,

        /// Base address of the service
        #[arg(short, long)]
        backend: Option<String>,
    },

    /// Make an O/X quiz about a video
    Quiz {
        /// YouTube URL or video ID
        url: String,

        /// Base address of the service
        #[arg(short, long)]
        backend: Option<String>,
    },

    /// Check whether the service is reachable
    Status {
        /// Base address of the service
        #[arg(short, long)]
        backend: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
