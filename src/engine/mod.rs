// ============================================================================
// Engine Module
// Sub-thousand speller and the amount-to-words converter
// ============================================================================

mod converter;
mod numerals;

pub use converter::{number_to_words, NumeralsToWords};
pub use numerals::{words, MAX_TRIAD};
