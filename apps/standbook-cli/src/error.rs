//! # CLI Error Types
//!
//! Everything that can stop a `standbook` run.
//!
//! ## Error Flow
//! ```text
//! ValidationError ─┐
//!                  ├──► CliError ──► main: log + exit_code()
//! CoreError ───────┤
//! io / toml ───────┘
//! ```

use standbook_core::{CoreError, ValidationError};
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Command-line arguments could not be understood.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration loaded but its values are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Snapshot file could not be read or written.
    #[error("Snapshot file error: {0}")]
    SnapshotIo(String),

    /// Report could not be rendered.
    #[error("Output failed: {0}")]
    Output(String),

    /// Ledger rejected an operation.
    #[error("Ledger error: {0}")]
    Ledger(#[from] CoreError),
}

impl CliError {
    /// Returns true if this error points at the user's configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            CliError::InvalidConfig(_) | CliError::ConfigLoadFailed(_)
        )
    }

    /// Process exit code: 2 for bad arguments or configuration, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_config_error() || matches!(self, CliError::InvalidArgument(_)) {
            2
        } else {
            1
        }
    }
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::InvalidConfig(err.to_string())
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(err.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_config_error() {
        let err: CliError = ValidationError::Required {
            field: "stand name".to_string(),
        }
        .into();
        assert!(err.is_config_error());
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Invalid configuration: stand name is required");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::InvalidArgument("--verbose".to_string()).exit_code(), 2);
        assert_eq!(CliError::ConfigLoadFailed("missing".to_string()).exit_code(), 2);
        assert_eq!(CliError::SnapshotIo("denied".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_core_error_wraps() {
        let err: CliError = CoreError::UnknownMenuItem("Water".to_string()).into();
        assert!(!err.is_config_error());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Ledger error: Menu item not found: Water");
    }
}
