//! CLI error types

use dist_models::distributions::DistributionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `probdist` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_error_is_transparent() {
        let err: CliError = DistributionError::invalid_parameter("Norm", "σ should be >0").into();
        assert_eq!(err.to_string(), "Norm: σ should be >0");
    }

    #[test]
    fn test_config_error_display() {
        let err: CliError = ConfigError::InvalidFormat("xml".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid output format: xml. Must be one of: plain, json"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let err = CliError::Parse("missing ')'".to_string());
        assert_eq!(err.to_string(), "Parse error: missing ')'");
    }

    #[test]
    fn test_io_error_converts() {
        let err: CliError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed").into();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: stdout closed");
    }
}
