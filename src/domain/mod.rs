//! Domain layer - Content model and its declarative shape

pub mod builder;
pub mod cheatsheet;
pub mod declaration;
pub mod notes;

pub use cheatsheet::{Category, Cheatsheet, Entries, Entry};
pub use declaration::{CategoryDeclaration, CheatsheetDeclaration, EntryDeclaration};
