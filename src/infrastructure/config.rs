//! Runtime settings read from the environment

use crate::error::Result;
use crate::infrastructure::DeclarationFormat;
use std::str::FromStr;

/// Log filter used when `CHEATSET_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `tracing` filter directive, e.g. `debug` or `cheatset=trace`
    pub log_filter: String,
    /// Raw `CHEATSET_FORMAT` value; only parsed when `export` needs it
    pub default_format: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            default_format: None,
        }
    }
}

impl Settings {
    /// Read `CHEATSET_LOG` and `CHEATSET_FORMAT`, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(filter) = lookup("CHEATSET_LOG").filter(|v| !v.trim().is_empty()) {
            settings.log_filter = filter;
        }

        settings.default_format = lookup("CHEATSET_FORMAT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        settings
    }

    /// Format `export` falls back to when neither a flag nor an output
    /// extension decides it
    pub fn export_format(&self) -> Result<DeclarationFormat> {
        match &self.default_format {
            Some(format) => DeclarationFormat::from_str(format),
            None => Ok(DeclarationFormat::default()),
        }
    }
}
