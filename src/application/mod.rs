//! Application layer - Use cases and orchestration

pub mod export;
pub mod load;

pub use export::ExportService;
pub use load::{validate_file, CheatsheetSource, LoadService};
