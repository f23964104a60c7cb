//! Error types for ATK

use thiserror::Error;

/// Core error type for ATK operations
#[derive(Error, Debug)]
pub enum AtkError {
    /// Operator/value-count combination violates the operator's declared arity
    #[error("Invalid filter arity: {0}")]
    InvalidFilterArity(String),

    /// Column data type outside the strict factory's known categories
    #[error("Invalid column data type: {0}")]
    InvalidColumnDataType(String),

    #[error("Unknown {category} operator: {operator:?}")]
    UnknownOperator {
        category: &'static str,
        operator: String,
    },

    /// A predicate was handed a filter value of another category
    #[error("Filter category mismatch: expected {expected}, found {found}")]
    CategoryMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AtkError {
    /// Returns true for errors that indicate a caller bug rather than bad input
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFilterArity(_)
                | Self::InvalidColumnDataType(_)
                | Self::CategoryMismatch { .. }
        )
    }
}

/// Result type alias for ATK operations
pub type Result<T> = std::result::Result<T, AtkError>;
