// ============================================================================
// Sub-Thousand Numerals
// English names for 0..=999, the building block of every scale group
// ============================================================================

use smallvec::SmallVec;

/// Word buffer shared by the speller and the converter.
pub(crate) type Words<'a> = SmallVec<[&'a str; 24]>;

/// Largest value the sub-thousand speller accepts.
pub const MAX_TRIAD: u16 = 999;

const ONES: [&str; 20] = [
    "Zero",
    "One",
    "Two",
    "Three",
    "Four",
    "Five",
    "Six",
    "Seven",
    "Eight",
    "Nine",
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

// Indices 0 and 1 are never read: values below 20 go through ONES
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell `n` (0..=999) as words, e.g. `678` → `"Six Hundred Seventy Eight"`.
///
/// Zero spells as the empty string; callers decide how to name a zero
/// amount. Returns `None` above 999.
///
/// # Example
/// ```
/// use rupee_words::engine::words;
///
/// assert_eq!(words(45).as_deref(), Some("Forty Five"));
/// assert_eq!(words(100).as_deref(), Some("One Hundred"));
/// assert_eq!(words(0).as_deref(), Some(""));
/// assert_eq!(words(1000), None);
/// ```
pub fn words(n: u16) -> Option<String> {
    if n > MAX_TRIAD {
        return None;
    }
    let mut out = Words::new();
    push_below_thousand(n, &mut out);
    Some(out.join(" "))
}

/// Append the words for `n` to `out` and return the recursion depth used.
///
/// Callers guarantee `n <= 999`; every recursive call receives a strictly
/// smaller value in the same range, so depth never exceeds 3.
pub(crate) fn push_below_thousand(n: u16, out: &mut Words<'_>) -> u8 {
    debug_assert!(n <= MAX_TRIAD, "triad out of range: {}", n);

    match n {
        0 => 1,
        1..=19 => {
            out.push(ONES[usize::from(n)]);
            1
        }
        20..=99 => {
            out.push(TENS[usize::from(n / 10)]);
            if n % 10 != 0 {
                1 + push_below_thousand(n % 10, out)
            } else {
                1
            }
        }
        _ => {
            let head = push_below_thousand(n / 100, out);
            out.push("Hundred");
            let tail = if n % 100 != 0 {
                push_below_thousand(n % 100, out)
            } else {
                0
            };
            1 + head.max(tail)
        }
    }
}
