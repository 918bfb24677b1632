//! Error types for table configuration.

use thiserror::Error;

use crate::border::BorderPreset;

/// Errors raised while configuring a table.
///
/// Rendering itself never fails: malformed escapes, short rows and tiny widths
/// are all handled in place.
#[derive(Debug, Error)]
pub enum TableError {
    /// Unknown border preset name.
    #[error("unknown table style '{0}' (expected one of: {names})", names = BorderPreset::NAMES.join(", "))]
    InvalidPreset(String),

    /// Configuration text could not be parsed.
    #[error("invalid table configuration: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for TableError {
    fn from(err: serde_yaml::Error) -> Self {
        TableError::Config(err.to_string())
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
