//! Error types for run settings validation.

use thiserror::Error;

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Structured errors emitted while validating run settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid value for '{field}'{}: {reason}", quoted(.value.as_deref()))]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Human-readable reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
}

fn quoted(value: Option<&str>) -> String {
    value.map_or_else(String::new, |value| format!(" '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_message_names_field_and_reason() {
        let err = ConfigError::InvalidField {
            field: "inputs",
            reason: "no input paths given",
            value: None,
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'inputs': no input paths given"
        );
    }

    #[test]
    fn invalid_field_message_includes_offending_value() {
        let err = ConfigError::InvalidField {
            field: "staging_root",
            reason: "lies inside a directory input",
            value: Some("/work/stage".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for 'staging_root' '/work/stage': lies inside a directory input"
        );
    }
}
