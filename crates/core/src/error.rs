use thiserror::Error;

/// Errors raised while formatting content metadata for display.
///
/// A malformed mandatory field is a content-authoring bug, so these are
/// always returned to the caller instead of being rendered as garbage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The date string could not be parsed as a calendar date.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate {
        /// Raw date string from the content record.
        input: String,
        /// Parser message.
        reason: String,
    },
}

impl FormatError {
    /// Create an invalid date error.
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Errors emitted while loading site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML failed to parse or did not match the expected shape.
    #[error("Site config YAML error: {0}")]
    Yaml(String),
    /// JSON failed to parse or did not match the expected shape.
    #[error("Site config JSON error: {0}")]
    Json(String),
    /// The file extension is neither YAML nor JSON.
    #[error("Unsupported site config format: {0}")]
    UnsupportedFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = FormatError::invalid_date("not-a-date", "input contains invalid characters");
        assert_eq!(
            err.to_string(),
            "Invalid date 'not-a-date': input contains invalid characters"
        );
    }

    #[test]
    fn test_config_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConfigError = io.into();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("IO error"));
    }
}
