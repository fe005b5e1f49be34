//! Built-in cheatsheets

pub mod haddock;

use crate::domain::Cheatsheet;
use crate::error::{CheatsetError, Result};

pub use haddock::haddock;

/// Keywords of every built-in cheatsheet
pub const BUILTIN_KEYWORDS: &[&str] = &[haddock::KEYWORD];

/// Build the built-in cheatsheet registered under `keyword` (case-insensitive)
pub fn builtin(keyword: &str) -> Result<Cheatsheet> {
    match keyword.trim().to_lowercase().as_str() {
        haddock::KEYWORD => Ok(haddock()?),
        _ => Err(CheatsetError::UnknownCheatsheet(keyword.to_string())),
    }
}
