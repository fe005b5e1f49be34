//! Cheatsheet content model
//!
//! A [`Cheatsheet`] is built once from a [`CheatsheetDeclaration`] and is
//! read-only afterwards. Category and entry order always match the
//! declaration.

use crate::domain::declaration::{CategoryDeclaration, CheatsheetDeclaration, EntryDeclaration};
use crate::error::ValidationError;
use std::iter::FusedIterator;

/// One named topic with explanatory notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    notes: String,
}

impl Entry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Prose with embedded fenced code samples, kept verbatim
    pub fn notes(&self) -> &str {
        &self.notes
    }
}

/// A named, ordered group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    id: String,
    entries: Vec<Entry>,
}

impl Category {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Entries in declaration order (never empty)
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

/// Root of the content tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cheatsheet {
    title: String,
    keyword: String,
    docset_file_name: Option<String>,
    introduction: String,
    categories: Vec<Category>,
    notes: Option<String>,
}

impl Cheatsheet {
    /// Validate a declaration and build the content tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking the cheatsheet
    /// fields first and then each category and its entries in order.
    pub fn from_declaration(
        decl: CheatsheetDeclaration,
    ) -> std::result::Result<Self, ValidationError> {
        let title = required(decl.title, "title")?;
        let keyword = required(decl.keyword, "keyword")?;

        let categories = decl
            .categories
            .into_iter()
            .enumerate()
            .map(|(index, category)| build_category(index + 1, category))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        if categories.is_empty() {
            tracing::warn!(keyword = %keyword, "cheatsheet declares no categories");
        }

        tracing::debug!(
            keyword = %keyword,
            categories = categories.len(),
            "constructed cheatsheet"
        );

        Ok(Cheatsheet {
            title,
            keyword,
            docset_file_name: decl.docset_file_name,
            introduction: decl.introduction,
            categories,
            notes: decl.notes,
        })
    }

    /// Re-serialize to the declarative shape this cheatsheet was built from
    pub fn to_declaration(&self) -> CheatsheetDeclaration {
        CheatsheetDeclaration {
            title: Some(self.title.clone()),
            keyword: Some(self.keyword.clone()),
            docset_file_name: self.docset_file_name.clone(),
            introduction: self.introduction.clone(),
            notes: self.notes.clone(),
            categories: self
                .categories
                .iter()
                .map(|category| CategoryDeclaration {
                    id: Some(category.id.clone()),
                    entries: category
                        .entries
                        .iter()
                        .map(|entry| EntryDeclaration {
                            name: Some(entry.name.clone()),
                            notes: entry.notes.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Lookup keyword of this cheatsheet
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Docset file name, falling back to the title when none was declared
    pub fn docset_file_name(&self) -> &str {
        self.docset_file_name.as_deref().unwrap_or(&self.title)
    }

    pub fn introduction(&self) -> &str {
        &self.introduction
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Total number of entries across all categories
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Walk every (category, entry) pair in declaration order.
    ///
    /// Each call starts a fresh traversal.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            categories: &self.categories,
            category: 0,
            entry: 0,
            remaining: self.entry_count(),
        }
    }

    /// Find a category by its exact id
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Find the first entry whose name matches, ignoring case and
    /// surrounding whitespace
    pub fn find_entry(&self, name: &str) -> Option<(&Category, &Entry)> {
        let wanted = name.trim().to_lowercase();
        self.entries()
            .find(|(_, entry)| entry.name.trim().to_lowercase() == wanted)
    }
}

/// Iterator over the (category, entry) pairs of a [`Cheatsheet`]
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    categories: &'a [Category],
    category: usize,
    entry: usize,
    remaining: usize,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a Category, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(category) = self.categories.get(self.category) {
            if let Some(entry) = category.entries.get(self.entry) {
                self.entry += 1;
                self.remaining -= 1;
                return Some((category, entry));
            }
            self.category += 1;
            self.entry = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

fn required(
    value: Option<String>,
    field: &'static str,
) -> std::result::Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::MissingField { field }),
    }
}

fn build_category(
    position: usize,
    decl: CategoryDeclaration,
) -> std::result::Result<Category, ValidationError> {
    let id = match decl.id {
        Some(id) if !id.trim().is_empty() => id,
        _ => return Err(ValidationError::MissingCategoryId { position }),
    };

    if decl.entries.is_empty() {
        return Err(ValidationError::EmptyCategory { category: id });
    }

    let mut entries = Vec::with_capacity(decl.entries.len());
    for (index, entry) in decl.entries.into_iter().enumerate() {
        match entry.name {
            Some(name) if !name.trim().is_empty() => entries.push(Entry {
                name,
                notes: entry.notes,
            }),
            _ => {
                return Err(ValidationError::MissingEntryName {
                    category: id,
                    position: index + 1,
                })
            }
        }
    }

    Ok(Category { id, entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, notes: &str) -> EntryDeclaration {
        EntryDeclaration {
            name: Some(name.to_string()),
            notes: notes.to_string(),
        }
    }

    fn category(id: &str, entries: Vec<EntryDeclaration>) -> CategoryDeclaration {
        CategoryDeclaration {
            id: Some(id.to_string()),
            entries,
        }
    }

    fn declaration(categories: Vec<CategoryDeclaration>) -> CheatsheetDeclaration {
        CheatsheetDeclaration {
            title: Some("Haddock Markup Cheatsheet".to_string()),
            keyword: Some("haddock".to_string()),
            docset_file_name: Some("Haddock".to_string()),
            introduction: "Haddock Markup Quick Reference".to_string(),
            notes: None,
            categories,
        }
    }

    fn pairs(sheet: &Cheatsheet) -> Vec<(String, String)> {
        sheet
            .entries()
            .map(|(c, e)| (c.id().to_string(), e.name().to_string()))
            .collect()
    }

    #[test]
    fn test_lists_traversal() {
        let decl = declaration(vec![category(
            "Lists",
            vec![entry("Unordered Lists", ""), entry("Ordered Lists", "")],
        )]);

        let sheet = Cheatsheet::from_declaration(decl).unwrap();
        assert_eq!(
            pairs(&sheet),
            vec![
                ("Lists".to_string(), "Unordered Lists".to_string()),
                ("Lists".to_string(), "Ordered Lists".to_string()),
            ]
        );
    }

    #[test]
    fn test_traversal_keeps_declaration_order() {
        let decl = declaration(vec![
            category("Zeta", vec![entry("b", ""), entry("a", "")]),
            category("Alpha", vec![entry("z", "")]),
            category("Mid", vec![entry("c", ""), entry("c2", ""), entry("a2", "")]),
        ]);

        let sheet = Cheatsheet::from_declaration(decl).unwrap();
        let ids: Vec<&str> = sheet.categories().iter().map(|c| c.id()).collect();
        assert_eq!(ids, vec!["Zeta", "Alpha", "Mid"]);

        let names: Vec<String> = pairs(&sheet).into_iter().map(|(_, e)| e).collect();
        assert_eq!(names, vec!["b", "a", "z", "c", "c2", "a2"]);
    }

    #[test]
    fn test_traversal_is_restartable() {
        let decl = declaration(vec![category("Lists", vec![entry("One", "")])]);
        let sheet = Cheatsheet::from_declaration(decl).unwrap();

        let mut first = sheet.entries();
        let snapshot = first.clone();
        assert!(first.next().is_some());
        assert!(first.next().is_none());
        assert!(first.next().is_none());

        assert_eq!(snapshot.count(), 1);
        assert_eq!(sheet.entries().count(), 1);
    }

    #[test]
    fn test_traversal_reports_exact_size() {
        let decl = declaration(vec![
            category("A", vec![entry("1", ""), entry("2", "")]),
            category("B", vec![entry("3", "")]),
        ]);
        let sheet = Cheatsheet::from_declaration(decl).unwrap();

        let mut iter = sheet.entries();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(sheet.entry_count(), 3);
    }

    #[test]
    fn test_no_categories_yields_nothing() {
        let sheet = Cheatsheet::from_declaration(declaration(vec![])).unwrap();
        assert_eq!(sheet.entries().next(), None);
    }

    #[test]
    fn test_empty_category_fails() {
        let decl = declaration(vec![category("Lists", vec![])]);
        let err = Cheatsheet::from_declaration(decl).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EmptyCategory {
                category: "Lists".to_string()
            }
        );
    }

    #[test]
    fn test_empty_entry_name_fails() {
        let decl = declaration(vec![category(
            "Lists",
            vec![entry("Unordered Lists", ""), entry("", "notes")],
        )]);
        let err = Cheatsheet::from_declaration(decl).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingEntryName {
                category: "Lists".to_string(),
                position: 2,
            }
        );
    }

    #[test]
    fn test_whitespace_entry_name_fails() {
        let decl = declaration(vec![category("Lists", vec![entry("   ", "")])]);
        assert!(matches!(
            Cheatsheet::from_declaration(decl),
            Err(ValidationError::MissingEntryName { position: 1, .. })
        ));
    }

    #[test]
    fn test_missing_category_id_fails() {
        let mut decl = declaration(vec![
            category("Lists", vec![entry("One", "")]),
            category("Other", vec![entry("Two", "")]),
        ]);
        decl.categories[1].id = None;

        let err = Cheatsheet::from_declaration(decl).unwrap_err();
        assert_eq!(err, ValidationError::MissingCategoryId { position: 2 });
    }

    #[test]
    fn test_missing_title_and_keyword_fail() {
        let mut decl = declaration(vec![]);
        decl.title = None;
        assert_eq!(
            Cheatsheet::from_declaration(decl).unwrap_err(),
            ValidationError::MissingField { field: "title" }
        );

        let mut decl = declaration(vec![]);
        decl.keyword = Some(String::new());
        assert_eq!(
            Cheatsheet::from_declaration(decl).unwrap_err(),
            ValidationError::MissingField { field: "keyword" }
        );
    }

    #[test]
    fn test_empty_notes_are_allowed() {
        let decl = declaration(vec![category("Lists", vec![entry("One", "")])]);
        let sheet = Cheatsheet::from_declaration(decl).unwrap();
        assert_eq!(sheet.categories()[0].entries()[0].notes(), "");
    }

    #[test]
    fn test_values_are_stored_verbatim() {
        let decl = declaration(vec![category(
            " Lists ",
            vec![entry("Unordered Lists", "  indented\n")],
        )]);
        let sheet = Cheatsheet::from_declaration(decl).unwrap();
        assert_eq!(sheet.categories()[0].id(), " Lists ");
        assert_eq!(sheet.categories()[0].entries()[0].notes(), "  indented\n");
    }

    #[test]
    fn test_round_trip_to_declaration() {
        let mut decl = declaration(vec![
            category("Lists", vec![entry("Unordered Lists", "* a\n* b")]),
            category("Metadata", vec![entry("Since", "```haskell\n-- @since 1.0\n```")]),
        ]);
        decl.notes = Some("Ported from upstream".to_string());

        let sheet = Cheatsheet::from_declaration(decl.clone()).unwrap();
        assert_eq!(sheet.to_declaration(), decl);

        let rebuilt = Cheatsheet::from_declaration(sheet.to_declaration()).unwrap();
        assert_eq!(rebuilt, sheet);
    }

    #[test]
    fn test_docset_file_name_falls_back_to_title() {
        let mut decl = declaration(vec![]);
        decl.docset_file_name = None;

        let sheet = Cheatsheet::from_declaration(decl.clone()).unwrap();
        assert_eq!(sheet.docset_file_name(), "Haddock Markup Cheatsheet");
        // The absence survives re-serialization
        assert_eq!(sheet.to_declaration().docset_file_name, None);
    }

    #[test]
    fn test_find_entry_ignores_case() {
        let decl = declaration(vec![
            category("Text Markup", vec![entry("Emphasis", "/x/")]),
            category("Lists", vec![entry("Ordered Lists", "1.")]),
        ]);
        let sheet = Cheatsheet::from_declaration(decl).unwrap();

        let (category, entry) = sheet.find_entry("ordered lists").unwrap();
        assert_eq!(category.id(), "Lists");
        assert_eq!(entry.notes(), "1.");
        assert!(sheet.find_entry("Tables").is_none());
    }

    #[test]
    fn test_find_entry_ignores_surrounding_whitespace() {
        let decl = declaration(vec![category("Lists", vec![entry(" Foo ", "x")])]);
        let sheet = Cheatsheet::from_declaration(decl).unwrap();

        let (_, found) = sheet.find_entry(" Foo ").unwrap();
        assert_eq!(found.name(), " Foo ");
        assert!(sheet.find_entry("foo").is_some());
    }

    #[test]
    fn test_category_lookup_is_exact() {
        let decl = declaration(vec![category("Lists", vec![entry("One", "")])]);
        let sheet = Cheatsheet::from_declaration(decl).unwrap();

        assert!(sheet.category("Lists").is_some());
        assert!(sheet.category("lists").is_none());
    }

    #[test]
    fn test_cheatsheet_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cheatsheet>();
    }
}
