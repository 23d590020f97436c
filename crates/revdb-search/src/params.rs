//! Lenient parsing of raw query-string values.
//!
//! Malformed numeric input never surfaces as an error: it is replaced by a
//! default before any filtering runs, so later stages can assume well-formed
//! values.

/// Minimum trimmed length (in characters) for a free-text term to count.
pub const MIN_TERM_CHARS: usize = 2;

/// Parse `raw` as a finite number and clamp it to `[min, max]`.
///
/// Absent, unparseable and non-finite values yield `default`.
#[must_use]
pub fn coerce_number(raw: Option<&str>, default: f64, min: f64, max: f64) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map_or(default, |v| v.clamp(min, max))
}

/// Integer flavor of [`coerce_number`]; fractional input is truncated.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_count(raw: Option<&str>, default: u32, min: u32, max: u32) -> u32 {
    // Clamped into [min, max] before the cast, so it cannot wrap.
    coerce_number(raw, f64::from(default), f64::from(min), f64::from(max)).trunc() as u32
}

/// Parse `raw` as a finite number, falling back to `default` when it lies
/// outside `[min, max]`.
#[must_use]
pub fn coerce_bounded(raw: Option<&str>, default: f64, min: f64, max: f64) -> f64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite() && (min..=max).contains(v))
        .unwrap_or(default)
}

/// Page size where anything below 1 means `default` and anything above `max` is capped.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn coerce_page_size(raw: Option<&str>, default: u32, max: u32) -> u32 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(f64::trunc)
        .filter(|v| *v >= 1.0)
        // At least 1 and capped at `max` before the cast.
        .map_or(default, |v| v.min(f64::from(max)) as u32)
}

/// Parse a coordinate, rejecting anything outside `[min, max]` instead of clamping.
#[must_use]
pub fn coerce_coordinate(raw: Option<&str>, min: f64, max: f64) -> Option<f64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite() && (min..=max).contains(v))
}

/// Trimmed, non-blank text parameter.
#[must_use]
pub fn non_blank(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

/// A free-text search term of at least [`MIN_TERM_CHARS`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    text: String,
    lowered: String,
}

impl SearchTerm {
    /// Returns `None` for absent, blank or too-short input.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let text = raw?.trim();
        if text.chars().count() < MIN_TERM_CHARS {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            lowered: text.to_lowercase(),
        })
    }

    /// The trimmed term as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The lowercased term used for case-insensitive matching.
    #[must_use]
    pub fn lowered(&self) -> &str {
        &self.lowered
    }
}

/// Case-insensitive containment against an already-lowercased needle.
pub(crate) fn contains_ci(haystack: Option<&str>, lowered_needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(lowered_needle))
}

/// Case-insensitive prefix test against an already-lowercased needle.
pub(crate) fn starts_with_ci(haystack: Option<&str>, lowered_needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().starts_with(lowered_needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_number_defaults_on_garbage() {
        assert!((coerce_number(None, 25.0, 0.0, 100.0) - 25.0).abs() < f64::EPSILON);
        assert!((coerce_number(Some("abc"), 25.0, 0.0, 100.0) - 25.0).abs() < f64::EPSILON);
        assert!((coerce_number(Some("NaN"), 25.0, 0.0, 100.0) - 25.0).abs() < f64::EPSILON);
        assert!((coerce_number(Some("inf"), 25.0, 0.0, 100.0) - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coerce_number_clamps_into_range() {
        assert!((coerce_number(Some("-3"), 0.0, 0.0, 5.0)).abs() < f64::EPSILON);
        assert!((coerce_number(Some(" 9 "), 0.0, 0.0, 5.0) - 5.0).abs() < f64::EPSILON);
        assert!((coerce_number(Some("3.5"), 0.0, 0.0, 5.0) - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn coerce_count_truncates_and_clamps() {
        assert_eq!(coerce_count(Some("7.9"), 8, 1, 20), 7);
        assert_eq!(coerce_count(Some("500"), 8, 1, 20), 20);
        assert_eq!(coerce_count(Some("0"), 8, 1, 20), 1);
        assert_eq!(coerce_count(Some("x"), 8, 1, 20), 8);
    }

    #[test]
    fn coerce_page_size_defaults_non_positive_values() {
        assert_eq!(coerce_page_size(Some("0"), 12, 50), 12);
        assert_eq!(coerce_page_size(Some("-5"), 12, 50), 12);
        assert_eq!(coerce_page_size(Some("0.5"), 12, 50), 12);
        assert_eq!(coerce_page_size(Some("nope"), 12, 50), 12);
        assert_eq!(coerce_page_size(Some("12.9"), 12, 50), 12);
        assert_eq!(coerce_page_size(Some("3"), 12, 50), 3);
        assert_eq!(coerce_page_size(Some("500"), 12, 50), 50);
    }

    #[test]
    fn coerce_bounded_defaults_out_of_range_values() {
        assert!(coerce_bounded(Some("6"), 0.0, 0.0, 5.0).abs() < f64::EPSILON);
        assert!(coerce_bounded(Some("-1"), 0.0, 0.0, 5.0).abs() < f64::EPSILON);
        assert!((coerce_bounded(Some(" 4.5 "), 0.0, 0.0, 5.0) - 4.5).abs() < f64::EPSILON);
        assert!((coerce_bounded(Some("5"), 0.0, 0.0, 5.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn coerce_coordinate_rejects_out_of_range() {
        assert_eq!(coerce_coordinate(Some("51.5"), -90.0, 90.0), Some(51.5));
        assert_eq!(coerce_coordinate(Some("91"), -90.0, 90.0), None);
        assert_eq!(coerce_coordinate(Some(""), -90.0, 90.0), None);
    }

    #[test]
    fn search_term_requires_two_chars() {
        assert!(SearchTerm::parse(Some("a")).is_none());
        assert!(SearchTerm::parse(Some("  a  ")).is_none());
        assert!(SearchTerm::parse(None).is_none());
        let term = SearchTerm::parse(Some(" AcMe ")).expect("term");
        assert_eq!(term.as_str(), "AcMe");
        assert_eq!(term.lowered(), "acme");
    }

    #[test]
    fn search_term_counts_characters_not_bytes() {
        // Single two-byte character is still one character.
        assert!(SearchTerm::parse(Some("é")).is_none());
    }
}
