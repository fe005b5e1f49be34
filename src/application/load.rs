//! Load cheatsheet use case

use crate::content;
use crate::domain::Cheatsheet;
use crate::error::Result;
use crate::infrastructure::read_declaration;
use std::path::{Path, PathBuf};

/// Where a cheatsheet comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheatsheetSource {
    /// A built-in cheatsheet, by keyword
    Builtin(String),
    /// A TOML or JSON declaration file
    File(PathBuf),
}

impl CheatsheetSource {
    /// A declaration file wins over a keyword
    pub fn resolve(keyword: &str, file: Option<PathBuf>) -> Self {
        match file {
            Some(path) => CheatsheetSource::File(path),
            None => CheatsheetSource::Builtin(keyword.to_string()),
        }
    }
}

/// Service for loading cheatsheets
pub struct LoadService;

impl LoadService {
    /// Build the cheatsheet described by `source`
    ///
    /// # Errors
    ///
    /// Returns an error if the keyword is unknown, the file cannot be read
    /// or parsed, or the declaration fails validation.
    pub fn load(source: &CheatsheetSource) -> Result<Cheatsheet> {
        let sheet = match source {
            CheatsheetSource::Builtin(keyword) => content::builtin(keyword)?,
            CheatsheetSource::File(path) => Self::load_file(path)?,
        };

        tracing::info!(
            keyword = sheet.keyword(),
            categories = sheet.categories().len(),
            entries = sheet.entry_count(),
            "loaded cheatsheet"
        );

        Ok(sheet)
    }

    fn load_file(path: &Path) -> Result<Cheatsheet> {
        let decl = read_declaration(path)?;
        Ok(Cheatsheet::from_declaration(decl)?)
    }
}

/// Validate a declaration file, returning the cheatsheet it describes
pub fn validate_file(path: &Path) -> Result<Cheatsheet> {
    LoadService::load(&CheatsheetSource::File(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CheatsetError, ValidationError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_prefers_file() {
        assert_eq!(
            CheatsheetSource::resolve("haddock", Some(PathBuf::from("x.toml"))),
            CheatsheetSource::File(PathBuf::from("x.toml"))
        );
        assert_eq!(
            CheatsheetSource::resolve("haddock", None),
            CheatsheetSource::Builtin("haddock".to_string())
        );
    }

    #[test]
    fn test_load_builtin() {
        let sheet = LoadService::load(&CheatsheetSource::Builtin("haddock".to_string())).unwrap();
        assert_eq!(sheet.title(), "Haddock Markup Cheatsheet");
    }

    #[test]
    fn test_load_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("lists.toml");
        fs::write(
            &path,
            r#"
title = "Lists"
keyword = "lists"

[[categories]]
id = "Lists"

[[categories.entries]]
name = "Unordered Lists"

[[categories.entries]]
name = "Ordered Lists"
"#,
        )
        .unwrap();

        let sheet = validate_file(&path).unwrap();
        let names: Vec<&str> = sheet.entries().map(|(_, e)| e.name()).collect();
        assert_eq!(names, vec!["Unordered Lists", "Ordered Lists"]);
    }

    #[test]
    fn test_load_file_reports_validation_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.toml");
        fs::write(
            &path,
            "title = \"T\"\nkeyword = \"t\"\n\n[[categories]]\nid = \"Lists\"\n",
        )
        .unwrap();

        match validate_file(&path).unwrap_err() {
            CheatsetError::Validation(ValidationError::EmptyCategory { category }) => {
                assert_eq!(category, "Lists")
            }
            other => panic!("Expected EmptyCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_load_unknown_builtin() {
        let result = LoadService::load(&CheatsheetSource::Builtin("nope".to_string()));
        assert!(matches!(result, Err(CheatsetError::UnknownCheatsheet(_))));
    }
}
