//! Declaration files on disk

use crate::domain::CheatsheetDeclaration;
use crate::error::{CheatsetError, Result};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Serialization format of a declaration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeclarationFormat {
    #[default]
    Toml,
    Json,
}

impl DeclarationFormat {
    /// Pick the format from a file extension; anything but `.json` is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DeclarationFormat::Json,
            _ => DeclarationFormat::Toml,
        }
    }

    pub fn parse(&self, contents: &str) -> Result<CheatsheetDeclaration> {
        match self {
            DeclarationFormat::Toml => Ok(toml::from_str(contents)?),
            DeclarationFormat::Json => Ok(serde_json::from_str(contents)?),
        }
    }

    pub fn render(&self, decl: &CheatsheetDeclaration) -> Result<String> {
        match self {
            DeclarationFormat::Toml => Ok(toml::to_string_pretty(decl)?),
            DeclarationFormat::Json => {
                let mut json = serde_json::to_string_pretty(decl)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

impl FromStr for DeclarationFormat {
    type Err = CheatsetError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "toml" => Ok(DeclarationFormat::Toml),
            "json" => Ok(DeclarationFormat::Json),
            _ => Err(CheatsetError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for DeclarationFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationFormat::Toml => write!(f, "toml"),
            DeclarationFormat::Json => write!(f, "json"),
        }
    }
}

/// Read a declaration file, choosing the format from its extension
pub fn read_declaration(path: &Path) -> Result<CheatsheetDeclaration> {
    let contents = fs::read_to_string(path).map_err(|source| CheatsetError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let format = DeclarationFormat::from_path(path);
    tracing::debug!(path = %path.display(), %format, "reading declaration");

    format.parse(&contents)
}

/// Write a declaration file, creating parent directories as needed
pub fn write_declaration(
    path: &Path,
    decl: &CheatsheetDeclaration,
    format: DeclarationFormat,
) -> Result<()> {
    let contents = format.render(decl)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), %format, "wrote declaration");

    Ok(())
}
