//! Error types for Relief

use thiserror::Error;

/// The main error type for Relief operations
#[derive(Debug, Error)]
pub enum ReliefError {
    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Relief operations
pub type Result<T> = std::result::Result<T, ReliefError>;

impl ReliefError {
    /// Name of the configuration field that was rejected, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ReliefError::InvalidConfiguration { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ReliefError {
    fn from(err: toml::de::Error) -> Self {
        ReliefError::TomlParseError(err.to_string())
    }
}
