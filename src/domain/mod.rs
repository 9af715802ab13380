// ============================================================================
// Domain Models Module
// Scale table and converter configuration
// ============================================================================

pub mod config;
pub mod scale;

pub use config::{ConverterConfig, NegativePolicy};
pub use scale::{Scale, ScaleGroup, ScaleGroups};
