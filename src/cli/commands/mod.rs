//! CLI command implementations.

mod config;
mod serve;
mod status;
mod study;

pub use config::run_config;
pub use serve::run_serve;
pub use status::run_status;
pub use study::run_study;
