// ============================================================================
// Numeric Module
// Currency amounts and the errors raised while building them
// ============================================================================
//
// This module provides:
// - Amount: non-negative rupees + paise (0-99)
// - ConversionError: Error types for amount construction and spelling
//
// Design principles:
// - Floats are read once at the boundary, then everything is integral
// - All construction returns Result (no panics)
// - Rounding is half-up to the nearest paisa

mod amount;
mod errors;

pub use amount::{Amount, PAISE_PER_RUPEE};
pub use errors::{ConversionError, ConversionResult};
