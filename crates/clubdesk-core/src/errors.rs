use thiserror::Error;

/// Reasons a batch label could not be read.
///
/// Callers deciding permissions treat every variant as a denial; the
/// variants exist so logs can say why.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("batch label is empty")]
    Empty,

    #[error("batch label '{0}' has no '-' separator")]
    MissingSeparator(String),

    #[error("batch label '{0}' does not start with a numeric year")]
    InvalidStartYear(String),

    #[error("batch label '{label}' must end with {expected}")]
    InvalidEndYear { label: String, expected: i32 },
}
