//! Error types for the NexusFin core.
//!
//! Errors exist only at the construction boundary: the calculators
//! downstream are total functions and never fail.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when constructing core domain types.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Invalid holding data.
    #[error("Invalid holding '{symbol}': {reason}")]
    InvalidHolding {
        /// The holding symbol.
        symbol: String,
        /// The reason the holding is invalid.
        reason: String,
    },
}

impl CoreError {
    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create an invalid holding error.
    #[must_use]
    pub fn invalid_holding(symbol: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidHolding {
            symbol: symbol.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::missing_field("symbol");
        assert!(err.to_string().contains("symbol"));

        let err = CoreError::invalid_holding("AAPL", "shares must be positive");
        assert!(err.to_string().contains("AAPL"));
        assert!(err.to_string().contains("shares must be positive"));
    }

    #[test]
    fn test_error_clone() {
        let err = CoreError::missing_field("shares");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
