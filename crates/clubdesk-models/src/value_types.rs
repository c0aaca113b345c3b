//! Validated value types for domain primitives.
//!
//! Records coming from the API keep their batch as a raw string so a
//! malformed value can still be displayed; [`BatchLabel`] is the checked
//! form produced by the clock and the batch pickers.
//!
//! # Example
//!
//! ```
//! use clubdesk_models::value_types::BatchLabel;
//!
//! let batch: BatchLabel = "2024-2025".parse().unwrap();
//! assert_eq!(batch.start_year(), 2024);
//! assert_eq!(batch.next().map(|b| b.to_string()), Some("2025-2026".to_string()));
//! assert!("2024-2026".parse::<BatchLabel>().is_err());
//! ```

use clubdesk_core::batch::{format_batch, parse_strict};
use clubdesk_core::errors::BatchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueTypeError {
    #[error("Invalid batch: {0}")]
    InvalidBatch(#[from] BatchError),
}

// ============================================================================
// BatchLabel
// ============================================================================

/// A well-formed `"<Y>-<Y+1>"` cohort label.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BatchLabel {
    start_year: i32,
    label: String,
}

impl BatchLabel {
    /// Build the label of the cohort starting in `start_year`.
    pub fn from_start_year(start_year: i32) -> Self {
        Self {
            start_year,
            label: format_batch(start_year),
        }
    }

    /// Parse and validate a label.
    pub fn new(label: impl AsRef<str>) -> Result<Self, ValueTypeError> {
        let start_year = parse_strict(label.as_ref())?;
        Ok(Self::from_start_year(start_year))
    }

    #[inline]
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// The cohort that follows this one, if its year is representable.
    pub fn next(&self) -> Option<Self> {
        self.start_year.checked_add(1).map(Self::from_start_year)
    }

    /// Whether a raw label refers to this cohort.
    pub fn matches(&self, raw: &str) -> bool {
        clubdesk_core::parse_start_year(raw).is_ok_and(|year| year == self.start_year)
    }
}

impl fmt::Debug for BatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BatchLabel({})", self.label)
    }
}

impl fmt::Display for BatchLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl FromStr for BatchLabel {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BatchLabel {
    type Error = ValueTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BatchLabel> for String {
    fn from(value: BatchLabel) -> Self {
        value.label
    }
}

impl AsRef<str> for BatchLabel {
    fn as_ref(&self) -> &str {
        &self.label
    }
}

impl PartialOrd for BatchLabel {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BatchLabel {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.start_year.cmp(&other.start_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_label_parse() {
        let batch = BatchLabel::new("2024-2025").unwrap();
        assert_eq!(batch.start_year(), 2024);
        assert_eq!(batch.as_str(), "2024-2025");
        assert_eq!(BatchLabel::new(" 2024-2025 ").unwrap(), batch);
    }

    #[test]
    fn test_batch_label_rejects_malformed() {
        assert!(BatchLabel::new("").is_err());
        assert!(BatchLabel::new("2024").is_err());
        assert!(BatchLabel::new("2024-2026").is_err());
        assert!(BatchLabel::new("twenty-2025").is_err());
    }

    #[test]
    fn test_batch_label_next_and_order() {
        let batch = BatchLabel::from_start_year(2024);
        let next = batch.next().unwrap();
        assert_eq!(next.as_str(), "2025-2026");
        assert!(next > batch);
        assert_eq!(BatchLabel::from_start_year(i32::MAX).next(), None);
    }

    #[test]
    fn test_batch_label_matches_raw() {
        let batch = BatchLabel::from_start_year(2024);
        assert!(batch.matches("2024-2025"));
        assert!(!batch.matches("2025-2026"));
        assert!(!batch.matches("nope"));
    }

    #[test]
    fn test_batch_label_serde() {
        let batch: BatchLabel = serde_json::from_str("\"2023-2024\"").unwrap();
        assert_eq!(batch.start_year(), 2023);
        assert_eq!(serde_json::to_string(&batch).unwrap(), "\"2023-2024\"");
        assert!(serde_json::from_str::<BatchLabel>("\"2023\"").is_err());
        assert!(serde_json::from_str::<BatchLabel>("\"2147483647-0\"").is_err());
    }
}
