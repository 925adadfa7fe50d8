//! Pre-flight checks before starting the service.
//!
//! Missing requirements do not stop the server: the liveness endpoint keeps
//! working and the affected endpoints answer with an error instead.

use crate::config::Settings;
use crate::error::{Result, StudyError};
use std::process::Command;

/// Check that the credential environment variable is set.
pub fn check_api_key(settings: &Settings) -> Result<String> {
    let var = &settings.generation.api_key_env;
    settings.generation.read_api_key().ok_or_else(|| {
        StudyError::Config(format!(
            "{} not set. Set it with: export {}='...'",
            var, var
        ))
    })
}

/// Check if an external tool is available.
pub fn check_tool(name: &str) -> Result<()> {
    match Command::new(name).arg("--version").output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(_) => Err(StudyError::ToolNotFound(format!(
            "{} is installed but not working correctly",
            name
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(StudyError::ToolNotFound(name.to_string()))
        }
        Err(e) => Err(StudyError::ToolNotFound(format!("{}: {}", name, e))),
    }
}
