//! Terminal configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock landing terminal. Timings are milliseconds.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FolioError, Result};

/// Timing and presentation settings for the landing terminal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Delay between two revealed characters.
    pub char_delay_ms: u32,
    /// Pause after a finished line before the next one starts.
    pub line_delay_ms: u32,
    /// Fade-out time between entering `Transition` and navigating.
    pub transition_delay_ms: u32,
    /// Host label used in the shell prompt (`name@host $`).
    pub host: String,
    /// Static header lines printed above the terminal body.
    pub boot_lines: Vec<String>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            char_delay_ms: 18,
            line_delay_ms: 40,
            transition_delay_ms: 600,
            host: "portfolio".to_string(),
            boot_lines: vec![
                "system initialized...".to_string(),
                "loading portfolio v1.0".to_string(),
            ],
        }
    }
}

impl TerminalConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded terminal config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let host = self.host.trim();
        if host.is_empty() || host.contains(char::is_whitespace) {
            return Err(FolioError::Config(format!(
                "host must be a single non-empty word, got {:?}",
                self.host
            )));
        }
        Ok(())
    }
}
