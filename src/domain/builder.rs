//! Builder DSL for declaring cheatsheets in code
//!
//! ```
//! use cheatset::domain::builder::cheatsheet;
//!
//! let sheet = cheatsheet(|c| {
//!     c.title("Haddock Markup Cheatsheet").keyword("haddock");
//!     c.category(|cat| {
//!         cat.id("Lists");
//!         cat.entry(|e| {
//!             e.name("Unordered Lists").notes("Use `*` or `-`.");
//!         });
//!     });
//! })
//! .unwrap();
//!
//! assert_eq!(sheet.entry_count(), 1);
//! ```

use crate::domain::cheatsheet::Cheatsheet;
use crate::domain::declaration::{CategoryDeclaration, CheatsheetDeclaration, EntryDeclaration};
use crate::domain::notes::dedent;
use crate::error::ValidationError;

/// Declare a cheatsheet and validate it in one go
pub fn cheatsheet(
    declare: impl FnOnce(&mut CheatsheetBuilder),
) -> std::result::Result<Cheatsheet, ValidationError> {
    let mut builder = CheatsheetBuilder::default();
    declare(&mut builder);
    builder.build()
}

#[derive(Debug, Default)]
pub struct CheatsheetBuilder {
    decl: CheatsheetDeclaration,
}

impl CheatsheetBuilder {
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.decl.title = Some(title.into());
        self
    }

    pub fn keyword(&mut self, keyword: impl Into<String>) -> &mut Self {
        self.decl.keyword = Some(keyword.into());
        self
    }

    pub fn docset_file_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.decl.docset_file_name = Some(name.into());
        self
    }

    pub fn introduction(&mut self, text: impl Into<String>) -> &mut Self {
        self.decl.introduction = dedent(&text.into());
        self
    }

    /// Trailing notes for the whole cheatsheet
    pub fn notes(&mut self, text: impl Into<String>) -> &mut Self {
        self.decl.notes = Some(dedent(&text.into()));
        self
    }

    pub fn category(&mut self, declare: impl FnOnce(&mut CategoryBuilder)) -> &mut Self {
        let mut builder = CategoryBuilder::default();
        declare(&mut builder);
        self.decl.categories.push(builder.decl);
        self
    }

    /// The declaration collected so far
    pub fn declaration(&self) -> &CheatsheetDeclaration {
        &self.decl
    }

    pub fn build(self) -> std::result::Result<Cheatsheet, ValidationError> {
        Cheatsheet::from_declaration(self.decl)
    }
}

#[derive(Debug, Default)]
pub struct CategoryBuilder {
    decl: CategoryDeclaration,
}

impl CategoryBuilder {
    pub fn id(&mut self, id: impl Into<String>) -> &mut Self {
        self.decl.id = Some(id.into());
        self
    }

    pub fn entry(&mut self, declare: impl FnOnce(&mut EntryBuilder)) -> &mut Self {
        let mut builder = EntryBuilder::default();
        declare(&mut builder);
        self.decl.entries.push(builder.decl);
        self
    }
}

#[derive(Debug, Default)]
pub struct EntryBuilder {
    decl: EntryDeclaration,
}

impl EntryBuilder {
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.decl.name = Some(name.into());
        self
    }

    /// Notes are dedented, so they can be written indented in source
    pub fn notes(&mut self, text: impl Into<String>) -> &mut Self {
        self.decl.notes = dedent(&text.into());
        self
    }
}
