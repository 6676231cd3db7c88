//! Error handling for the Solana account analyzer.
//!
//! Classification itself never fails. The errors here cover the edges of the
//! pipeline: fetching accounts over RPC, parsing user-supplied addresses,
//! decoding fixed token layouts, and writing reports.

use thiserror::Error;
use std::fmt;

/// Main error type for the account analyzer.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The requested account does not exist on the cluster.
    #[error("Account not found: {0}")]
    NotFound(String),

    /// A user-supplied address is not a valid base58 public key.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// A fixed-layout decoder hit bytes it could not interpret.
    ///
    /// The analyzer embeds this message in the report instead of failing.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Errors related to RPC communication, such as connection failures.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Errors related to file I/O when writing reports.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization failures.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Fallback for other errors that don't fit into the above categories.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Result type alias for the account analyzer.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Context information for errors.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Account being analyzed, if applicable.
    pub address: Option<String>,

    /// Component where the error occurred (e.g., "monitor").
    pub component: String,

    /// Operation being performed when the error occurred (e.g., "fetch_account").
    pub operation: String,

    /// Additional context details.
    pub details: Option<String>,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "In {} while {}", self.component, self.operation)?;
        if let Some(address) = &self.address {
            write!(f, " for account {}", address)?;
        }
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

/// Extension trait for adding context to errors.
pub trait ErrorExt<T> {
    /// Add context to an error.
    ///
    /// Errors that are already an [`AnalyzerError`] pass through unchanged;
    /// anything else is wrapped into the closest matching variant with the
    /// context prepended to its message.
    fn with_context(self, context: ErrorContext) -> AnalyzerResult<T>;

    /// Add component and operation context to an error.
    fn with_simple_context(self, component: &str, operation: &str) -> AnalyzerResult<T>;
}

impl<T, E: std::error::Error + 'static> ErrorExt<T> for Result<T, E> {
    fn with_context(self, context: ErrorContext) -> AnalyzerResult<T> {
        self.map_err(|e| {
            let error_msg = format!("{}: {}", context, e);
            let boxed: Box<dyn std::error::Error + 'static> = Box::new(e);
            let boxed = match boxed.downcast::<AnalyzerError>() {
                Ok(analyzer_err) => return *analyzer_err,
                Err(other) => other,
            };
            match boxed.downcast::<std::io::Error>() {
                Ok(io_err) => AnalyzerError::Io(std::io::Error::new(io_err.kind(), error_msg)),
                Err(other) => match other.to_string().to_lowercase() {
                    s if s.contains("rpc") || s.contains("connection") || s.contains("request") =>
                        AnalyzerError::Rpc(error_msg),
                    s if s.contains("base58") || s.contains("wrong size") || s.contains("pubkey") =>
                        AnalyzerError::InvalidAddress(error_msg),
                    s if s.contains("slice") || s.contains("decode") =>
                        AnalyzerError::Decode(error_msg),
                    _ => AnalyzerError::Unknown(error_msg),
                },
            }
        })
    }

    fn with_simple_context(self, component: &str, operation: &str) -> AnalyzerResult<T> {
        self.with_context(ErrorContext {
            address: None,
            component: component.to_string(),
            operation: operation.to_string(),
            details: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let context = ErrorContext {
            address: Some("11111111111111111111111111111111".to_string()),
            component: "monitor".to_string(),
            operation: "fetch_account".to_string(),
            details: Some("commitment confirmed".to_string()),
        };

        assert_eq!(
            context.to_string(),
            "In monitor while fetch_account for account 11111111111111111111111111111111 (commitment confirmed)"
        );
    }

    #[test]
    fn test_analyzer_error_passes_through() {
        let result: Result<(), AnalyzerError> = Err(AnalyzerError::NotFound("abc".to_string()));
        let err = result.with_simple_context("monitor", "fetch_account").unwrap_err();
        assert!(matches!(err, AnalyzerError::NotFound(ref a) if a == "abc"));
    }

    #[test]
    fn test_io_error_keeps_kind() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let result: Result<(), std::io::Error> = Err(io);
        let err = result.with_simple_context("report", "write_report").unwrap_err();
        match err {
            AnalyzerError::Io(e) => {
                assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
                assert!(e.to_string().starts_with("In report while write_report"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_is_classified() {
        let result = "not-a-key!".parse::<solana_pubkey::Pubkey>();
        let err = result.with_simple_context("cli", "parse_address").unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidAddress(_)));
    }
}
