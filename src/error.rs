//! Error types for batch encoding.

use thiserror::Error;

/// Result type alias for encoding operations
pub type Result<T> = std::result::Result<T, AchError>;

/// Errors that can occur while building or rendering a batch.
#[derive(Error, Debug)]
pub enum AchError {
    /// Numeric value has more digits than its field can hold
    #[error("Value {value} does not fit in a {width}-digit numeric field")]
    FieldOverflow { value: String, width: usize },

    /// Input to a numeric field is not a whole number
    #[error("Invalid numeric field value '{value}': {reason}")]
    InvalidFieldValue { value: String, reason: &'static str },

    /// Summing entry amounts overflowed
    #[error("Total amount overflowed while summing batch entries")]
    AmountOverflow,

    /// Accumulating the entry hash overflowed
    #[error("Entry hash overflowed while summing routing numbers")]
    HashOverflow,

    /// Failed to open or read the input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid entry row in an import
    #[error("Invalid entry at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },
}
