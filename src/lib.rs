// ============================================================================
// Rupee Words Library
// Currency amounts spelled in English with Indian digit grouping
// ============================================================================

//! # Rupee Words
//!
//! Turns currency amounts into invoice-ready English phrases using the
//! Indian numbering system (thousand, lakh, crore).
//!
//! ## Features
//!
//! - **Indian grouping**: `1,23,45,678` reads as crore / lakh / thousand / units
//! - **Paise handling** with half-up rounding to two decimal places
//! - **Configurable labels** for major/minor units, conjunction and terminator
//! - **Explicit input policy** for negative and non-finite amounts
//!
//! ## Example
//!
//! ```rust
//! use rupee_words::prelude::*;
//!
//! assert_eq!(
//!     number_to_words(12_345_678.0).unwrap(),
//!     "One Crore Twenty Three Lakh Forty Five Thousand Six Hundred Seventy Eight Rupees Only"
//! );
//!
//! let converter = NumeralsToWords::new(ConverterConfig::lenient()).unwrap();
//! assert_eq!(converter.convert_f64(-3.0).unwrap(), "Zero Rupees Only");
//!
//! let total: Amount = "12,34,567.80".parse().unwrap();
//! assert_eq!(total.to_indian_grouped(), "12,34,567.80");
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

pub use engine::number_to_words;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConverterConfig, NegativePolicy, Scale, ScaleGroups};
    pub use crate::engine::{number_to_words, words, NumeralsToWords};
    pub use crate::numeric::{Amount, ConversionError, ConversionResult};
}
