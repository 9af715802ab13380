// ============================================================================
// Currency Amount
// Non-negative rupee amount with paise precision
// ============================================================================

use super::errors::{ConversionError, ConversionResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of paise in one rupee.
pub const PAISE_PER_RUPEE: u64 = 100;

/// 2^64 as f64; anything at or above this has no u64 whole part.
const F64_WHOLE_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Longest whole part (u64::MAX) in decimal digits.
const MAX_WHOLE_DIGITS: usize = 20;

/// A non-negative currency amount split into whole rupees and paise.
///
/// The paise component is always in `0..=99`. Inputs with more than two
/// fractional digits are rounded half-up to the nearest paisa, and a
/// rounding result of 100 paise carries into the rupee part.
///
/// # Example
/// ```
/// use rupee_words::numeric::Amount;
///
/// let amount = Amount::from_f64(99.5).unwrap();
/// assert_eq!(amount.rupees(), 99);
/// assert_eq!(amount.paise(), 50);
///
/// let carried = Amount::from_f64(0.999).unwrap();
/// assert_eq!((carried.rupees(), carried.paise()), (1, 0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AmountParts"))]
pub struct Amount {
    rupees: u64,
    paise: u8,
}

impl Amount {
    /// Zero rupees, zero paise
    pub const ZERO: Self = Self {
        rupees: 0,
        paise: 0,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a whole number of rupees.
    #[inline]
    pub const fn from_rupees(rupees: u64) -> Self {
        Self { rupees, paise: 0 }
    }

    /// Create from rupee and paise parts.
    ///
    /// # Errors
    /// Returns `InvalidInput` if `paise` is 100 or more.
    #[inline]
    pub fn from_parts(rupees: u64, paise: u8) -> ConversionResult<Self> {
        if u64::from(paise) >= PAISE_PER_RUPEE {
            return Err(ConversionError::InvalidInput);
        }
        Ok(Self { rupees, paise })
    }

    /// Create from a total count of paise.
    #[inline]
    pub const fn from_paise(total: u64) -> Self {
        Self {
            rupees: total / PAISE_PER_RUPEE,
            paise: (total % PAISE_PER_RUPEE) as u8,
        }
    }

    /// Create from a `Decimal`, rounding half-up to paise.
    ///
    /// Negative zero is accepted as zero.
    ///
    /// # Errors
    /// - `Negative` if the value is below zero
    /// - `Overflow` if the whole part exceeds `u64::MAX`
    pub fn from_decimal(value: Decimal) -> ConversionResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ConversionError::Negative);
        }

        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let whole = rounded.trunc();
        let rupees = whole.to_u64().ok_or(ConversionError::Overflow)?;

        // (rounded - whole) is in [0, 0.99] after rounding to two places
        let paise = ((rounded - whole) * Decimal::ONE_HUNDRED)
            .to_u8()
            .ok_or(ConversionError::InvalidInput)?;

        Self::from_parts(rupees, paise)
    }

    /// Create from an `f64`.
    ///
    /// The whole part is `floor(value)`, exact for every float below 2^64.
    /// Paise are `round((value - whole) * 100)` on the binary value, so
    /// `99.5` is 99 rupees 50 paise while `9.995` (stored just below
    /// 9.995) gives 99 paise.
    ///
    /// # Errors
    /// - `NonFinite` for NaN and infinities
    /// - `Negative` if the value is below zero
    /// - `Overflow` if the whole part exceeds `u64::MAX`
    pub fn from_f64(value: f64) -> ConversionResult<Self> {
        if !value.is_finite() {
            return Err(ConversionError::NonFinite);
        }
        if value < 0.0 {
            return Err(ConversionError::Negative);
        }

        if value >= F64_WHOLE_LIMIT {
            return Err(ConversionError::Overflow);
        }

        // Both steps are exact: value < 2^64 and value - floor(value) is representable
        let whole = value.floor();
        let rupees = whole as u64;
        let paise = ((value - whole) * 100.0).round() as u64;

        if paise >= PAISE_PER_RUPEE {
            let rupees = rupees.checked_add(1).ok_or(ConversionError::Overflow)?;
            return Ok(Self::from_rupees(rupees));
        }
        Self::from_parts(rupees, paise as u8)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whole rupees.
    #[inline]
    pub const fn rupees(self) -> u64 {
        self.rupees
    }

    /// Paise, always in `0..=99`.
    #[inline]
    pub const fn paise(self) -> u8 {
        self.paise
    }

    /// Check if the amount is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.rupees == 0 && self.paise == 0
    }

    /// Total paise, or `None` if it does not fit in u64.
    #[inline]
    pub fn total_paise(self) -> Option<u64> {
        self.rupees
            .checked_mul(PAISE_PER_RUPEE)?
            .checked_add(u64::from(self.paise))
    }

    /// Convert to `Decimal` with two decimal places.
    pub fn to_decimal(self) -> Decimal {
        Decimal::from(self.rupees) + Decimal::new(i64::from(self.paise), 2)
    }

    /// Render with Indian digit grouping and two decimals.
    ///
    /// The last three digits form one group; every group above that has two
    /// digits, so one crore renders as `1,00,00,000.00`.
    pub fn to_indian_grouped(self) -> String {
        let digits = self.rupees.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 2 + 4);

        if digits.len() <= 3 {
            out.push_str(&digits);
        } else {
            let (head, tail) = digits.split_at(digits.len() - 3);
            // Leading group is one digit when the head has odd length
            let lead = head.len() % 2;
            if lead == 1 {
                out.push_str(&head[..1]);
            }
            for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
                if i > 0 || lead == 1 {
                    out.push(',');
                }
                out.extend(pair.iter().map(|&b| char::from(b)));
            }
            out.push(',');
            out.push_str(tail);
        }

        out.push('.');
        out.push_str(&format!("{:02}", self.paise));
        out
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.rupees, self.paise)
    }
}

impl FromStr for Amount {
    type Err = ConversionError;

    /// Parse a decimal string such as `"1500"`, `"99.50"` or `"12,34,567.80"`.
    ///
    /// Commas may only separate digit groups of the whole part. A leading
    /// `-` is read as a negative amount; `+`, exponents and empty groups are
    /// rejected. More than two fractional digits are rounded half-up.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match body.split_once('.') {
            Some((int_str, frac)) => (int_str, Some(frac)),
            None => (body, None),
        };

        let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !int_str.split(',').all(is_digits) {
            return Err(ConversionError::InvalidInput);
        }
        if frac_str.is_some_and(|frac| !is_digits(frac)) {
            return Err(ConversionError::InvalidInput);
        }

        let mut cleaned: String = int_str.chars().filter(|c| *c != ',').collect();
        let whole_digits = cleaned.trim_start_matches('0').len();
        if let Some(frac) = frac_str {
            cleaned.push('.');
            cleaned.push_str(frac);
        }

        let decimal = Decimal::from_str(&cleaned).map_err(|_| {
            if whole_digits > MAX_WHOLE_DIGITS {
                ConversionError::Overflow
            } else {
                ConversionError::InvalidInput
            }
        })?;

        if negative && !decimal.is_zero() {
            return Err(ConversionError::Negative);
        }
        Self::from_decimal(decimal)
    }
}

// ============================================================================
// Checked Deserialization
// ============================================================================

/// Wire shape of `Amount`; deserialized values pass through `from_parts`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct AmountParts {
    rupees: u64,
    paise: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<AmountParts> for Amount {
    type Error = ConversionError;

    fn try_from(parts: AmountParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts.rupees, parts.paise)
    }
}

impl From<u64> for Amount {
    fn from(rupees: u64) -> Self {
        Self::from_rupees(rupees)
    }
}

impl TryFrom<f64> for Amount {
    type Error = ConversionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ConversionError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_from_f64_splits_parts() {
        let x = Amount::from_f64(99.50).unwrap();
        assert_eq!(x.rupees(), 99);
        assert_eq!(x.paise(), 50);

        let y = Amount::from_f64(0.75).unwrap();
        assert_eq!(y.rupees(), 0);
        assert_eq!(y.paise(), 75);

        let z = Amount::from_f64(12_345_678.0).unwrap();
        assert_eq!(z.rupees(), 12_345_678);
        assert_eq!(z.paise(), 0);
    }

    #[test]
    fn test_from_f64_rounds_half_up() {
        assert_eq!(Amount::from_f64(10.125).unwrap().paise(), 13);
        assert_eq!(Amount::from_f64(10.124).unwrap().paise(), 12);
        assert_eq!(Amount::from_f64(0.1).unwrap().paise(), 10);
        assert_eq!(Amount::from_f64(0.005).unwrap().paise(), 1);
        assert_eq!(Amount::from_f64(0.0004).unwrap(), Amount::ZERO);

        // 9.995 is stored as 9.99499999..., so it stays below the carry
        let x = Amount::from_f64(9.995).unwrap();
        assert_eq!((x.rupees(), x.paise()), (9, 99));
    }

    #[test]
    fn test_from_f64_carries_hundred_paise() {
        let x = Amount::from_f64(0.999).unwrap();
        assert_eq!(x.rupees(), 1);
        assert_eq!(x.paise(), 0);

        let y = Amount::from_f64(41.996).unwrap();
        assert_eq!(y.rupees(), 42);
        assert_eq!(y.paise(), 0);
    }

    #[test]
    fn test_from_f64_rejects_invalid() {
        assert_eq!(Amount::from_f64(f64::NAN), Err(ConversionError::NonFinite));
        assert_eq!(
            Amount::from_f64(f64::INFINITY),
            Err(ConversionError::NonFinite)
        );
        assert_eq!(Amount::from_f64(-1.0), Err(ConversionError::Negative));
        assert_eq!(Amount::from_f64(1e30), Err(ConversionError::Overflow));
    }

    #[test]
    fn test_from_f64_keeps_large_whole_parts_exact() {
        let x = Amount::from_f64(18_446_744_073_709_549_568.0).unwrap();
        assert_eq!(x.rupees(), 18_446_744_073_709_549_568);
        assert_eq!(x.paise(), 0);

        let y = Amount::from_f64(2f64.powi(60)).unwrap();
        assert_eq!(y.rupees(), 1 << 60);
    }

    #[test]
    fn test_from_f64_fraction_of_large_value() {
        // 1e15 + 0.125 is exactly representable; its text form is 1000000000000000.1
        let x = Amount::from_f64(1e15 + 0.125).unwrap();
        assert_eq!(x.rupees(), 1_000_000_000_000_000);
        assert_eq!(x.paise(), 13);
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(Amount::from_f64(-0.0).unwrap(), Amount::ZERO);
        assert_eq!(Amount::from_decimal(-Decimal::ZERO).unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_from_decimal() {
        let x = Amount::from_decimal(Decimal::new(12345, 2)).unwrap(); // 123.45
        assert_eq!(x.rupees(), 123);
        assert_eq!(x.paise(), 45);

        assert_eq!(
            Amount::from_decimal(Decimal::new(-1, 2)),
            Err(ConversionError::Negative)
        );
    }

    #[test]
    fn test_from_decimal_overflow() {
        let huge = Decimal::from(u64::MAX) + Decimal::ONE;
        assert_eq!(Amount::from_decimal(huge), Err(ConversionError::Overflow));

        let max = Amount::from_decimal(Decimal::from(u64::MAX)).unwrap();
        assert_eq!(max.rupees(), u64::MAX);
    }

    #[test]
    fn test_from_parts_invalid() {
        assert_eq!(
            Amount::from_parts(1, 100),
            Err(ConversionError::InvalidInput)
        );
        assert!(Amount::from_parts(1, 99).is_ok());
    }

    #[test]
    fn test_from_str() {
        let x: Amount = "99.50".parse().unwrap();
        assert_eq!((x.rupees(), x.paise()), (99, 50));

        let y: Amount = " 12,34,567.80 ".parse().unwrap();
        assert_eq!((y.rupees(), y.paise()), (1_234_567, 80));

        let z: Amount = "0.005".parse().unwrap();
        assert_eq!((z.rupees(), z.paise()), (0, 1));
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "not_a_number".parse::<Amount>(),
            Err(ConversionError::InvalidInput)
        );
        assert_eq!("".parse::<Amount>(), Err(ConversionError::InvalidInput));
        assert_eq!("-5".parse::<Amount>(), Err(ConversionError::Negative));

        // Malformed totals are rejected rather than reinterpreted
        let malformed = [
            "1,,2", "1e3", "1E3", "+5", ",100", "100,", "1.2.3", "1.", ".5", "1.5,0", "-", "1 000",
        ];
        for bad in malformed {
            assert_eq!(
                bad.parse::<Amount>(),
                Err(ConversionError::InvalidInput),
                "{:?} should not parse",
                bad
            );
        }
    }

    #[test]
    fn test_from_str_grouping_and_limits() {
        let x: Amount = "1,000".parse().unwrap();
        assert_eq!(x.rupees(), 1_000);

        let zero: Amount = "-0.00".parse().unwrap();
        assert_eq!(zero, Amount::ZERO);

        assert_eq!(
            "99999999999999999999999999999999".parse::<Amount>(),
            Err(ConversionError::Overflow)
        );
        assert_eq!(
            "18446744073709551616".parse::<Amount>(),
            Err(ConversionError::Overflow)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::from_parts(99, 5).unwrap().to_string(), "99.05");
        assert_eq!(Amount::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_indian_grouped() {
        assert_eq!(Amount::from_rupees(0).to_indian_grouped(), "0.00");
        assert_eq!(Amount::from_rupees(999).to_indian_grouped(), "999.00");
        assert_eq!(Amount::from_rupees(1_000).to_indian_grouped(), "1,000.00");
        assert_eq!(
            Amount::from_rupees(100_000).to_indian_grouped(),
            "1,00,000.00"
        );
        assert_eq!(
            Amount::from_parts(1_234_567, 80).unwrap().to_indian_grouped(),
            "12,34,567.80"
        );
        assert_eq!(
            Amount::from_rupees(10_000_000).to_indian_grouped(),
            "1,00,00,000.00"
        );
        assert_eq!(
            Amount::from_rupees(123_456_789).to_indian_grouped(),
            "12,34,56,789.00"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_checks_paise() {
        let ok: Amount = serde_json::from_str(r#"{"rupees":5,"paise":25}"#).unwrap();
        assert_eq!((ok.rupees(), ok.paise()), (5, 25));

        let bad = serde_json::from_str::<Amount>(r#"{"rupees":5,"paise":250}"#);
        assert!(bad.is_err());
        let edge = serde_json::from_str::<Amount>(r#"{"rupees":5,"paise":100}"#);
        assert!(edge.is_err());
    }

    #[test]
    fn test_to_decimal() {
        let x = Amount::from_parts(123, 45).unwrap();
        assert_eq!(x.to_decimal().to_string(), "123.45");
    }

    quickcheck! {
        fn prop_from_paise_preserves_total(total: u64) -> bool {
            let amount = Amount::from_paise(total);
            amount.paise() < 100 && amount.total_paise() == Some(total)
        }

        fn prop_whole_f64_has_no_paise(rupees: u32) -> bool {
            let amount = Amount::from_f64(f64::from(rupees)).unwrap();
            amount.rupees() == u64::from(rupees) && amount.paise() == 0
        }
    }
}
