//! Error types for the API

use thiserror::Error;

/// Error type for API operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input, such as bytes that are not UTF-8
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    /// Unsupported feature
    #[error("Feature not supported: {0}")]
    Unsupported(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::Configuration("rtl_class must not be empty".into()).to_string(),
            "Configuration error: rtl_class must not be empty"
        );
        assert_eq!(
            Error::InvalidInput("bad".into()).to_string(),
            "Invalid input: bad"
        );
    }
}
