//! Error types for address parsing, formatting and host/port splitting.

use thiserror::Error;

/// Errors that can occur while converting addresses between text, bytes and
/// decimal form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    /// The text does not match any recognized address or `host:port` shape.
    #[error("Invalid address format: {0}")]
    Format(String),

    /// A decimal value does not fit in the 128-bit address space.
    #[error("Value out of range: {0}")]
    Range(String),
}

impl AddrError {
    pub(crate) fn format(reason: impl Into<String>) -> Self {
        AddrError::Format(reason.into())
    }

    pub(crate) fn range(reason: impl Into<String>) -> Self {
        AddrError::Range(reason.into())
    }
}

impl From<hex::FromHexError> for AddrError {
    fn from(err: hex::FromHexError) -> Self {
        AddrError::Format(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AddrError::format("not a valid IP address").to_string(),
            "Invalid address format: not a valid IP address"
        );

        assert_eq!(
            AddrError::range("exceeds 128 bits").to_string(),
            "Value out of range: exceeds 128 bits"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(AddrError::format("x"), AddrError::format("x"));
        assert_ne!(AddrError::format("x"), AddrError::range("x"));
    }

    #[test]
    fn test_hex_error_conversion() {
        let hex_error = hex::decode("zz").unwrap_err();
        let addr_error: AddrError = hex_error.into();
        assert!(matches!(addr_error, AddrError::Format(_)));
    }
}
