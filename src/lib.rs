//! cheatset - Cheatsheet content model for docset generators
//!
//! Cheatsheets are declared as ordered categories of named entries, validated
//! once at construction and then handed, read-only, to an external docset
//! exporter. The crate ships the Haddock markup cheatsheet as built-in
//! content.

pub mod application;
pub mod cli;
pub mod content;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Category, Cheatsheet, Entry};
pub use error::{CheatsetError, ValidationError};
