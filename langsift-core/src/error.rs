//! Error types for configuration and batch setup
//!
//! Counting itself never fails; these errors only come from loading
//! profiles, validating configuration and building worker pools.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for langsift operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unknown preset name
    #[error("Invalid preset: {0}")]
    InvalidPreset(String),

    /// Profile file could not be read
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// Path of the profile file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Profile file is not valid TOML for the profile schema
    #[error("Failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// Worker pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

/// Result type for langsift operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration("split size must be greater than 0".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: split size must be greater than 0"
        );
    }

    #[test]
    fn test_io_error_display_includes_path() {
        let error = Error::Io {
            path: PathBuf::from("/missing/profile.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = error.to_string();
        assert!(message.contains("/missing/profile.toml"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_parse_error_from_toml() {
        let parse_error = toml::from_str::<toml::Table>("key = ").unwrap_err();
        let error: Error = parse_error.into();
        assert!(error.to_string().starts_with("Failed to parse profile:"));
    }
}
