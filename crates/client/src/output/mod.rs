//! Output formatting for CLI results.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Serialize a value for commands without a dedicated pretty layout.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => json::format_json_pretty(value),
    }
}
