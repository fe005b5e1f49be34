//! Declarative shape of a cheatsheet
//!
//! This is what declaration files deserialize into and what a constructed
//! [`Cheatsheet`](crate::domain::Cheatsheet) serializes back to. Required
//! fields are optional here so a missing one can be reported by name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheatsheetDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docset_file_name: Option<String>,

    #[serde(default)]
    pub introduction: String,

    /// Trailing notes shown after the last category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default)]
    pub categories: Vec<CategoryDeclaration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub entries: Vec<EntryDeclaration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryDeclaration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_declaration() {
        let source = r#"
title = "Haddock Markup Cheatsheet"
keyword = "haddock"
docset_file_name = "Haddock"
introduction = "Haddock Markup Quick Reference"

[[categories]]
id = "Lists"

[[categories.entries]]
name = "Unordered Lists"
notes = "Use `*` or `-`."

[[categories.entries]]
name = "Ordered Lists"
"#;

        let decl: CheatsheetDeclaration = toml::from_str(source).unwrap();
        assert_eq!(decl.title.as_deref(), Some("Haddock Markup Cheatsheet"));
        assert_eq!(decl.keyword.as_deref(), Some("haddock"));
        assert_eq!(decl.notes, None);
        assert_eq!(decl.categories.len(), 1);
        assert_eq!(decl.categories[0].id.as_deref(), Some("Lists"));
        assert_eq!(decl.categories[0].entries[0].notes, "Use `*` or `-`.");
        // Missing notes default to empty
        assert_eq!(decl.categories[0].entries[1].notes, "");
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let decl: CheatsheetDeclaration = toml::from_str("introduction = \"x\"").unwrap();
        assert_eq!(decl.title, None);
        assert_eq!(decl.keyword, None);
        assert!(decl.categories.is_empty());
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let decl = CheatsheetDeclaration {
            title: Some("T".to_string()),
            keyword: Some("t".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&decl).unwrap();
        assert!(!json.contains("docset_file_name"));
        assert!(!json.contains("\"notes\""));
        assert!(json.contains("\"title\":\"T\""));
    }
}
