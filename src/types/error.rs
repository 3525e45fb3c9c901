//! Error types for ipdrift

use std::path::PathBuf;
use thiserror::Error;

/// Error types for drift run operations
#[derive(Debug, Error)]
pub enum DriftError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),

    /// A remote range provider was unreachable or returned a bad payload
    #[error("Fetch failed for {provider}: {source}")]
    Fetch {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Credentials handshake with an authenticated provider failed
    #[error("Authentication failed for {provider}: {reason}")]
    Auth {
        provider: &'static str,
        reason: String,
    },

    /// A snapshot workbook could not be written
    #[error("Failed to write workbook {path}: {reason}")]
    WorkbookWrite { path: PathBuf, reason: String },

    /// A snapshot workbook could not be read
    #[error("Failed to read workbook {path}: {reason}")]
    WorkbookRead { path: PathBuf, reason: String },

    /// The previous snapshot has no sheet for a category the run tracks
    #[error("Category {0:?} missing from previous snapshot")]
    MissingCategory(String),
}

impl DriftError {
    /// Check if this error was raised before any fetch started
    pub fn is_config_error(&self) -> bool {
        matches!(self, DriftError::Config(_))
    }

    /// Check if this error came from a remote provider
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            DriftError::Fetch { .. } | DriftError::Auth { .. } | DriftError::HttpClient(_)
        )
    }

    /// Check if this error came from snapshot persistence
    pub fn is_persistence_error(&self) -> bool {
        matches!(
            self,
            DriftError::Io(_)
                | DriftError::WorkbookWrite { .. }
                | DriftError::WorkbookRead { .. }
                | DriftError::MissingCategory(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let drift_error: DriftError = io_error.into();

        assert!(matches!(drift_error, DriftError::Io(_)));
        assert!(drift_error.to_string().contains("IO error"));
        assert!(drift_error.is_persistence_error());
    }

    #[test]
    fn test_config_error() {
        let error = DriftError::Config("missing key 'aws_region'".to_string());
        assert!(error.to_string().contains("Configuration error"));
        assert!(error.to_string().contains("aws_region"));
        assert!(error.is_config_error());
        assert!(!error.is_fetch_error());
    }

    #[test]
    fn test_auth_error() {
        let error = DriftError::Auth {
            provider: "Genesys Cloud",
            reason: "token endpoint returned 401 Unauthorized".to_string(),
        };
        assert!(error.to_string().contains("Authentication failed"));
        assert!(error.to_string().contains("Genesys Cloud"));
        assert!(error.is_fetch_error());
    }

    #[test]
    fn test_workbook_errors_carry_path() {
        let error = DriftError::WorkbookRead {
            path: PathBuf::from("previous_ips.xlsx"),
            reason: "not a zip archive".to_string(),
        };
        assert!(error.to_string().contains("previous_ips.xlsx"));
        assert!(error.is_persistence_error());

        let error = DriftError::WorkbookWrite {
            path: PathBuf::from("latest_ips.xlsx"),
            reason: "permission denied".to_string(),
        };
        assert!(error.to_string().contains("latest_ips.xlsx"));
        assert!(error.is_persistence_error());
    }

    #[test]
    fn test_missing_category() {
        let error = DriftError::MissingCategory("API Gateway".to_string());
        assert!(error.to_string().contains("API Gateway"));
        assert!(error.to_string().contains("previous snapshot"));
        assert!(error.is_persistence_error());
    }

    #[test]
    fn test_result_propagation() {
        fn inner_function() -> Result<(), DriftError> {
            Err(DriftError::Config("test error".to_string()))
        }

        fn outer_function() -> Result<(), DriftError> {
            inner_function()?;
            Ok(())
        }

        let result = outer_function();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), DriftError::Config(_)));
    }
}
