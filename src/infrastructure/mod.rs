//! Infrastructure layer - External I/O and process setup

pub mod config;
pub mod declaration_file;
pub mod logging;

pub use config::Settings;
pub use declaration_file::{read_declaration, write_declaration, DeclarationFormat};
