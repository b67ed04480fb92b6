//! Error types for configuration and document enhancement.

use thiserror::Error;

/// Errors that can occur while loading a [`StepperConfig`](crate::StepperConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the stepper cannot work with
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        message: String,
    },

    /// Configuration written for a newer format
    #[error("Unsupported config version {found} (supported up to {supported})")]
    UnsupportedVersion {
        /// Version found in the configuration
        found: u32,
        /// Newest version this build understands
        supported: u32,
    },
}

/// Errors that can occur while enhancing number inputs in a document.
#[derive(Error, Debug)]
pub enum EnhanceError {
    /// No global `window` (not running in a browser main thread)
    #[error("No window available")]
    MissingWindow,

    /// The window has no document
    #[error("No document available")]
    MissingDocument,

    /// A DOM call threw
    #[error("DOM error: {0}")]
    Dom(String),

    /// Invalid configuration
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::InvalidValue {
            field: "selector",
            message: "must not be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for 'selector': must not be empty");

        let err = EnhanceError::from(ConfigError::UnsupportedVersion {
            found: 3,
            supported: 1,
        });
        assert_eq!(err.to_string(), "Unsupported config version 3 (supported up to 1)");
    }
}
