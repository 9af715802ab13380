// ============================================================================
// Numerals To Words Converter
// Currency amounts spelled out with Indian digit grouping
// ============================================================================

use super::numerals::{push_below_thousand, Words, MAX_TRIAD};
use crate::domain::{ConverterConfig, NegativePolicy, Scale, ScaleGroups};
use crate::numeric::{Amount, ConversionError, ConversionResult};
use rust_decimal::Decimal;

/// Spells currency amounts as English words.
///
/// Whole units are grouped as crore, lakh, thousand and units, most
/// significant first; paise follow after the conjunction and every phrase
/// ends with the terminator.
///
/// # Example
/// ```
/// use rupee_words::prelude::*;
///
/// let converter = NumeralsToWords::default();
/// assert_eq!(
///     converter.convert_f64(99.50).unwrap(),
///     "Ninety Nine Rupees and Fifty Paise Only"
/// );
/// assert_eq!(
///     converter.convert(Amount::from_rupees(100_000)),
///     "One Lakh Rupees Only"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NumeralsToWords {
    config: ConverterConfig,
}

impl Default for NumeralsToWords {
    fn default() -> Self {
        Self {
            config: ConverterConfig::rupees(),
        }
    }
}

impl NumeralsToWords {
    /// Create a converter from a validated configuration.
    pub fn new(config: ConverterConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this converter was built with.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Spell an amount. Infallible: `Amount` is non-negative by construction.
    pub fn convert(&self, amount: Amount) -> String {
        let major = self.config.major_unit.as_str();
        let minor = self.config.minor_unit.as_str();
        let terminator = self.config.terminator.as_str();

        let mut out = Words::new();

        if amount.is_zero() {
            out.extend(["Zero", major, terminator]);
        } else if amount.rupees() == 0 {
            push_below_thousand(u16::from(amount.paise()), &mut out);
            out.extend([minor, terminator]);
        } else {
            push_whole(amount.rupees(), &mut out);
            out.push(major);
            if amount.paise() > 0 {
                out.push(self.config.conjunction.as_str());
                push_below_thousand(u16::from(amount.paise()), &mut out);
                out.push(minor);
            }
            out.push(terminator);
        }

        let phrase = out.join(" ");
        tracing::debug!(%amount, words = out.len(), "spelled amount");
        phrase
    }

    /// Spell an `f64` amount.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and infinities
    /// - `Negative` for negative input under `NegativePolicy::Reject`
    /// - `Overflow` if the whole part exceeds `u64::MAX`
    pub fn convert_f64(&self, amount: f64) -> ConversionResult<String> {
        let amount = self.admit(Amount::from_f64(amount))?;
        Ok(self.convert(amount))
    }

    /// Spell a `Decimal` amount.
    pub fn convert_decimal(&self, amount: Decimal) -> ConversionResult<String> {
        let amount = self.admit(Amount::from_decimal(amount))?;
        Ok(self.convert(amount))
    }

    /// Parse and spell a decimal string such as `"12,34,567.80"`.
    pub fn convert_str(&self, amount: &str) -> ConversionResult<String> {
        let amount = self.admit(amount.parse::<Amount>())?;
        Ok(self.convert(amount))
    }

    /// Apply the negative policy to a construction result.
    fn admit(&self, parsed: ConversionResult<Amount>) -> ConversionResult<Amount> {
        match parsed {
            Err(ConversionError::Negative)
                if self.config.negative_policy == NegativePolicy::Clamp =>
            {
                tracing::warn!("negative amount clamped to zero");
                Ok(Amount::ZERO)
            },
            other => other,
        }
    }
}

/// Spell an amount with the default rupee configuration.
///
/// ```
/// use rupee_words::number_to_words;
///
/// assert_eq!(number_to_words(1500.0).unwrap(), "One Thousand Five Hundred Rupees Only");
/// assert_eq!(number_to_words(0.75).unwrap(), "Seventy Five Paise Only");
/// ```
pub fn number_to_words(amount: f64) -> ConversionResult<String> {
    NumeralsToWords::default().convert_f64(amount)
}

/// Append the grouped words for a whole amount.
///
/// Lakh, thousand and unit counts are always below 1000. A crore count of
/// 1000 or more is grouped again, so 10^10 reads "One Thousand Crore".
fn push_whole(n: u64, out: &mut Words<'_>) {
    let groups = ScaleGroups::decompose(n);
    tracing::trace!(
        crore = groups.crore,
        lakh = groups.lakh,
        thousand = groups.thousand,
        units = groups.units,
        "decomposed whole amount"
    );

    for group in groups.non_zero() {
        match u16::try_from(group.count) {
            Ok(count) if count <= MAX_TRIAD => {
                push_below_thousand(count, out);
            },
            _ => push_whole(group.count, out),
        }
        if group.scale != Scale::Units {
            out.push(group.scale.name());
        }
    }
}
