//! Batch label parsing.
//!
//! A batch is a membership cohort labelled `"<start>-<start+1>"`, for
//! example `"2024-2025"`. Labels are compared only by their start year, the
//! integer before the first hyphen.

use crate::errors::BatchError;

/// Width of the start year in a batch label.
pub const YEAR_DIGITS: usize = 4;

/// Extract the start year of a batch label.
///
/// Only the part before the first `-` is inspected. It must be exactly
/// [`YEAR_DIGITS`] ASCII digits; anything else is a parse failure.
///
/// # Example
///
/// ```
/// use clubdesk_core::batch::parse_start_year;
///
/// assert_eq!(parse_start_year("2024-2025"), Ok(2024));
/// assert!(parse_start_year("2024").is_err());
/// assert!(parse_start_year("abc-2025").is_err());
/// assert!(parse_start_year("2147483647-2148").is_err());
/// ```
pub fn parse_start_year(label: &str) -> Result<i32, BatchError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(BatchError::Empty);
    }

    let (prefix, _) = label
        .split_once('-')
        .ok_or_else(|| BatchError::MissingSeparator(label.to_string()))?;

    if prefix.len() != YEAR_DIGITS || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BatchError::InvalidStartYear(label.to_string()));
    }

    prefix
        .parse::<i32>()
        .map_err(|_| BatchError::InvalidStartYear(label.to_string()))
}

/// Parse a full label and check that the end year follows the start year.
pub fn parse_strict(label: &str) -> Result<i32, BatchError> {
    let start = parse_start_year(label)?;
    let expected = start
        .checked_add(1)
        .ok_or_else(|| BatchError::InvalidStartYear(label.to_string()))?;

    let end = label.trim().split_once('-').map(|(_, end)| end).unwrap_or("");
    match end.parse::<i32>() {
        Ok(year) if year == expected => Ok(start),
        _ => Err(BatchError::InvalidEndYear {
            label: label.to_string(),
            expected,
        }),
    }
}

/// Render the label for a cohort starting in `start_year`.
///
/// The end year saturates at `i32::MAX`, so such a label never parses
/// strictly.
#[inline]
pub fn format_batch(start_year: i32) -> String {
    format!("{}-{}", start_year, start_year.saturating_add(1))
}

/// Compare two labels by start year. Malformed labels never match.
pub fn same_batch(a: &str, b: &str) -> bool {
    match (parse_start_year(a), parse_start_year(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_year_valid() {
        assert_eq!(parse_start_year("2024-2025"), Ok(2024));
        assert_eq!(parse_start_year("2019-2020"), Ok(2019));
        assert_eq!(parse_start_year(" 2030-2031 "), Ok(2030));
    }

    #[test]
    fn test_parse_start_year_only_reads_prefix() {
        // Suffix is not inspected by the lenient parser
        assert_eq!(parse_start_year("2024-whatever"), Ok(2024));
        assert_eq!(parse_start_year("2024-2025-extra"), Ok(2024));
    }

    #[test]
    fn test_parse_start_year_malformed() {
        assert_eq!(parse_start_year(""), Err(BatchError::Empty));
        assert_eq!(parse_start_year("   "), Err(BatchError::Empty));
        assert!(matches!(
            parse_start_year("2024"),
            Err(BatchError::MissingSeparator(_))
        ));
        assert!(matches!(
            parse_start_year("abcd-2025"),
            Err(BatchError::InvalidStartYear(_))
        ));
        assert!(matches!(
            parse_start_year("-2025"),
            Err(BatchError::InvalidStartYear(_))
        ));
        assert!(matches!(
            parse_start_year("20x4-2025"),
            Err(BatchError::InvalidStartYear(_))
        ));
    }

    #[test]
    fn test_parse_start_year_requires_four_digits() {
        for label in ["2147483647-2148", "2147483647-0", "99999-100000", "24-25", "02024-2025"] {
            assert!(
                matches!(parse_start_year(label), Err(BatchError::InvalidStartYear(_))),
                "{label:?} should be rejected"
            );
            assert!(parse_strict(label).is_err());
        }
        assert_eq!(parse_start_year("0999-1000"), Ok(999));
    }

    #[test]
    fn test_parse_strict() {
        assert_eq!(parse_strict("2024-2025"), Ok(2024));
        assert!(matches!(
            parse_strict("2024-2026"),
            Err(BatchError::InvalidEndYear { expected: 2025, .. })
        ));
        assert!(parse_strict("2024-").is_err());
    }

    #[test]
    fn test_format_batch() {
        assert_eq!(format_batch(2024), "2024-2025");
        assert!(parse_strict(&format_batch(i32::MAX)).is_err());
        for year in [1999, 2019, 2024, 2100] {
            assert_eq!(parse_start_year(&format_batch(year)), Ok(year));
        }
    }

    #[test]
    fn test_same_batch() {
        assert!(same_batch("2024-2025", "2024-2025"));
        assert!(same_batch("2024-2025", " 2024-2025"));
        assert!(!same_batch("2024-2025", "2025-2026"));
        assert!(!same_batch("garbage", "garbage"));
        assert!(!same_batch("", ""));
    }
}
