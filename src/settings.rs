//! Server settings
//!
//! Settings come from an optional TOML file. A missing file means defaults.
//!
//! ```toml
//! indent = 4
//! log_level = "debug"
//! log_dir = "/var/log/checklist"
//! ```

use crate::checklist::DEFAULT_INDENT;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Spaces per indent level in saved documents (0 = single line)
    pub indent: usize,
    /// Log level: error, warn, info, debug or trace
    pub log_level: String,
    /// Write rotating log files here instead of stderr
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
