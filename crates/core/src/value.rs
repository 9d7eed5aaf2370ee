//! Clue value normalization.
//!
//! Raw value cells carry currency symbols, thousands separators, and the
//! archive's daily-double markers. This module reduces them to a canonical
//! digit string plus a daily-double flag. It only reformats the numeric
//! content, never reinterprets it.

/// Sentinel emitted when a grid clue has no recoverable value.
///
/// Kept verbatim for compatibility with existing exports, even though it is
/// indistinguishable from a legitimate negative wager.
pub const MISSING_VALUE: &str = "-100";

/// A normalized clue value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedValue {
    /// Canonical digit string, or [`MISSING_VALUE`].
    pub value: String,
    /// Whether the raw text carried the daily-double marker.
    pub daily_double: bool,
}

/// Normalizes a raw value string.
///
/// Empty input yields the missing sentinel. Otherwise the daily-double flag
/// is set iff the text starts with `DD:`, the `DD:`/`D:` markers and a `$`
/// token are stripped, and comma separators are removed.
///
/// # Example
///
/// ```rust
/// use cluecards_core::value::normalize;
///
/// let v = normalize("DD: $1,200");
/// assert_eq!(v.value, "1200");
/// assert!(v.daily_double);
/// ```
pub fn normalize(raw: &str) -> NormalizedValue {
    let raw = raw.trim();
    if raw.is_empty() {
        return NormalizedValue { value: MISSING_VALUE.to_string(), daily_double: false };
    }

    let daily_double = raw.starts_with("DD:");
    let stripped = raw
        .strip_prefix("DD:")
        .or_else(|| raw.strip_prefix("D:"))
        .unwrap_or(raw)
        .trim_start();
    let stripped = stripped.strip_prefix('$').unwrap_or(stripped);

    NormalizedValue { value: stripped.replace(',', ""), daily_double }
}
