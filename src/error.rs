//! Error types for cheatset

use std::path::PathBuf;
use thiserror::Error;

/// A declaration that cannot be turned into a cheatsheet.
///
/// Positions are 1-based, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Cheatsheet is missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Category #{position} is missing required field 'id'")]
    MissingCategoryId { position: usize },

    #[error("Category '{category}' has no entries")]
    EmptyCategory { category: String },

    #[error("Entry #{position} in category '{category}' is missing required field 'name'")]
    MissingEntryName { category: String, position: usize },
}

/// Main error type for cheatset
#[derive(Debug, Error)]
pub enum CheatsetError {
    #[error("Invalid cheatsheet: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown cheatsheet: {0}")]
    UnknownCheatsheet(String),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CheatsetError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CheatsetError::Validation(_) => 2,
            CheatsetError::UnknownCheatsheet(_) => 3,
            CheatsetError::EntryNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CheatsetError::Validation(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Every cheatsheet needs a non-empty 'title' and 'keyword'\n\
                    • Every category needs an 'id' and at least one entry\n\
                    • Every entry needs a 'name'",
                    self
                )
            }
            CheatsetError::UnknownCheatsheet(keyword) => {
                format!(
                    "Unknown cheatsheet: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'cheatset list' to see built-in cheatsheets\n\
                    • Load a declaration file with --file <PATH>",
                    keyword
                )
            }
            CheatsetError::EntryNotFound(name) => {
                format!(
                    "No entry named '{}'\n\n\
                    Suggestions:\n\
                    • Entry names are matched case-insensitively\n\
                    • Use 'cheatset entries' to see every entry",
                    name
                )
            }
            CheatsetError::UnsupportedFormat(format) => {
                format!(
                    "Unsupported format: '{}'\n\n\
                    Valid formats: toml, json\n\
                    Example: cheatset export haddock --format json",
                    format
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CheatsetError
pub type Result<T> = std::result::Result<T, CheatsetError>;
