//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod languages;
pub mod list_rules;
pub mod output;
