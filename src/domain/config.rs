// ============================================================================
// Converter Configuration
// Unit labels and input policy for the words converter
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Negative Policy
// ============================================================================

/// What to do with amounts below zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NegativePolicy {
    /// Fail with `ConversionError::Negative`
    #[default]
    Reject,
    /// Spell the amount as zero and log a warning
    Clamp,
}

// ============================================================================
// Converter Configuration
// ============================================================================

/// Labels and policy used when spelling an amount.
///
/// The major unit is always used verbatim; "One Rupees Only" is
/// intentional and is not singularized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterConfig {
    /// Whole-unit label (e.g. "Rupees")
    pub major_unit: String,

    /// Sub-unit label (e.g. "Paise")
    pub minor_unit: String,

    /// Word joining the major and minor phrases (e.g. "and")
    pub conjunction: String,

    /// Closing word of every phrase (e.g. "Only")
    pub terminator: String,

    /// Handling of negative input
    pub negative_policy: NegativePolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::rupees()
    }
}

impl ConverterConfig {
    /// Create a configuration with custom unit labels
    pub fn new(major_unit: impl Into<String>, minor_unit: impl Into<String>) -> Self {
        Self {
            major_unit: major_unit.into(),
            minor_unit: minor_unit.into(),
            conjunction: "and".to_string(),
            terminator: "Only".to_string(),
            negative_policy: NegativePolicy::Reject,
        }
    }

    /// Builder method: Set the conjunction word
    pub fn with_conjunction(mut self, conjunction: impl Into<String>) -> Self {
        self.conjunction = conjunction.into();
        self
    }

    /// Builder method: Set the terminator word
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Builder method: Set the negative amount policy
    pub fn with_negative_policy(mut self, policy: NegativePolicy) -> Self {
        self.negative_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let labels = [
            ("Major unit", &self.major_unit),
            ("Minor unit", &self.minor_unit),
            ("Conjunction", &self.conjunction),
            ("Terminator", &self.terminator),
        ];

        for (field, value) in labels {
            if value.is_empty() {
                return Err(format!("{} cannot be empty", field));
            }
            if value.trim() != value.as_str() {
                return Err(format!(
                    "{} cannot have leading or trailing whitespace",
                    field
                ));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl ConverterConfig {
    /// Invoice-style rupee configuration
    /// - "Rupees" / "Paise"
    /// - Negative amounts rejected
    pub fn rupees() -> Self {
        Self::new("Rupees", "Paise")
    }

    /// Rupee configuration that clamps negative amounts to zero
    pub fn lenient() -> Self {
        Self::rupees().with_negative_policy(NegativePolicy::Clamp)
    }
}
