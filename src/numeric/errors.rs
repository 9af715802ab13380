// ============================================================================
// Conversion Errors
// Error types for amount construction and spelling
// ============================================================================

use std::fmt;

/// Errors that can occur while turning an input into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// Input was NaN or infinite
    NonFinite,
    /// Input was below zero and the policy rejects it
    Negative,
    /// Whole-rupee part does not fit in u64
    Overflow,
    /// Input string could not be parsed as a decimal amount
    InvalidInput,
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NonFinite => write!(f, "amount is not a finite number"),
            ConversionError::Negative => {
                write!(f, "negative amount: only non-negative amounts can be spelled")
            },
            ConversionError::Overflow => {
                write!(f, "amount overflow: whole part exceeds the supported range")
            },
            ConversionError::InvalidInput => write!(f, "invalid input: could not parse amount"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
