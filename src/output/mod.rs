mod json;
mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

use clap::ValueEnum;

use crate::checker::Report;
use crate::error::Result;

/// Trait for formatting a report into an output format.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
