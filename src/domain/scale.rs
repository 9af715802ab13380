// ============================================================================
// Indian Scale Table
// Crore / Lakh / Thousand / Units grouping of whole amounts
// ============================================================================

use arrayvec::ArrayVec;
use std::fmt;

/// A named power in the Indian numbering system.
///
/// This is the South-Asian grouping (thousand, lakh, crore), not the
/// international thousand/million/billion scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scale {
    /// 1
    Units,
    /// 1,000
    Thousand,
    /// 1,00,000
    Lakh,
    /// 1,00,00,000
    Crore,
}

impl Scale {
    /// All scales, most significant first.
    pub const DESCENDING: [Scale; 4] = [Scale::Crore, Scale::Lakh, Scale::Thousand, Scale::Units];

    /// The value one unit of this scale stands for.
    #[inline]
    pub const fn divisor(self) -> u64 {
        match self {
            Scale::Units => 1,
            Scale::Thousand => 1_000,
            Scale::Lakh => 100_000,
            Scale::Crore => 10_000_000,
        }
    }

    /// Word appended after a group count (empty for units).
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Scale::Units => "",
            Scale::Thousand => "Thousand",
            Scale::Lakh => "Lakh",
            Scale::Crore => "Crore",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scale::Units => write!(f, "Units"),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// One non-zero group of a decomposed amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleGroup {
    pub scale: Scale,
    pub count: u64,
}

/// A whole number split by successive division over the scale table.
///
/// `lakh` and `thousand` are always below 100 and `units` below 1000.
/// `crore` is unbounded and may itself need grouping when it reaches 1000.
///
/// # Example
/// ```
/// use rupee_words::domain::ScaleGroups;
///
/// let groups = ScaleGroups::decompose(12_345_678);
/// assert_eq!(groups.crore, 1);
/// assert_eq!(groups.lakh, 23);
/// assert_eq!(groups.thousand, 45);
/// assert_eq!(groups.units, 678);
/// assert_eq!(groups.recompose(), Some(12_345_678));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScaleGroups {
    pub crore: u64,
    pub lakh: u8,
    pub thousand: u8,
    pub units: u16,
}

impl ScaleGroups {
    /// Split `n` into crore, lakh, thousand and unit counts.
    pub const fn decompose(n: u64) -> Self {
        let crore = n / Scale::Crore.divisor();
        let rem = n % Scale::Crore.divisor();
        let lakh = rem / Scale::Lakh.divisor();
        let rem = rem % Scale::Lakh.divisor();
        let thousand = rem / Scale::Thousand.divisor();
        let units = rem % Scale::Thousand.divisor();

        Self {
            crore,
            lakh: lakh as u8,
            thousand: thousand as u8,
            units: units as u16,
        }
    }

    /// Numerically recombine the groups.
    ///
    /// Returns `None` on overflow, which cannot happen for groups produced
    /// by [`ScaleGroups::decompose`].
    pub fn recompose(&self) -> Option<u64> {
        self.crore
            .checked_mul(Scale::Crore.divisor())?
            .checked_add(u64::from(self.lakh) * Scale::Lakh.divisor())?
            .checked_add(u64::from(self.thousand) * Scale::Thousand.divisor())?
            .checked_add(u64::from(self.units))
    }

    /// Count held for a given scale.
    #[inline]
    pub fn count(&self, scale: Scale) -> u64 {
        match scale {
            Scale::Crore => self.crore,
            Scale::Lakh => u64::from(self.lakh),
            Scale::Thousand => u64::from(self.thousand),
            Scale::Units => u64::from(self.units),
        }
    }

    /// Non-zero groups, most significant first.
    pub fn non_zero(&self) -> ArrayVec<ScaleGroup, 4> {
        Scale::DESCENDING
            .iter()
            .map(|&scale| ScaleGroup {
                scale,
                count: self.count(scale),
            })
            .filter(|group| group.count > 0)
            .collect()
    }

    /// Check if every group is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.crore == 0 && self.lakh == 0 && self.thousand == 0 && self.units == 0
    }
}

// ============================================================================
// Tests
// ============================================================================
