//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, DEFAULT_KEYWORD};
pub use output::{
    format_builtin_list, format_entry, format_entry_pairs, format_outline, format_summary,
};
