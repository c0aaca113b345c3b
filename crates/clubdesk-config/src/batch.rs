//! Academic-batch configuration.
//!
//! The console screens this crate replaces disagreed on two constants:
//!
//! - the month at which a new academic batch becomes active (June on the
//!   admin, course and role screens, July on the member and event listings)
//! - the first year offered in historical batch pickers (2019 on most
//!   screens, 2024 on the admin-account screen)
//!
//! Both variants are exposed as named constants. The configured values
//! default to June and 2019 and can be overridden from the environment
//! until product settles on one behaviour.
//!
//! # Configuration
//!
//! - `BATCH_BOUNDARY_MONTH`: month number 1-12 or an English month name (default 6)
//! - `BATCH_HISTORY_START_YEAR`: first year of the batch picker (default 2019)
//! - `ADMIN_BATCH_HISTORY_START_YEAR`: first year of the admin batch picker (default 2024)

use chrono::Month;
use tracing::warn;

/// Boundary used by the admin, course and role screens (month index 5).
pub const ACADEMIC_YEAR_BOUNDARY: Month = Month::June;

/// Boundary used by the member and event listings (month index 6).
pub const LISTING_YEAR_BOUNDARY: Month = Month::July;

/// First batch year offered by most batch pickers.
pub const HISTORY_START_YEAR: i32 = 2019;

/// First batch year offered by the admin-account batch picker.
pub const ADMIN_HISTORY_START_YEAR: i32 = 2024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchConfig {
    /// Month at which the active batch rolls over to the next one.
    pub boundary_month: Month,
    /// First start year offered to superadmins in batch pickers.
    pub history_start_year: i32,
    /// First start year offered in the admin-account batch picker.
    pub admin_history_start_year: i32,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            boundary_month: ACADEMIC_YEAR_BOUNDARY,
            history_start_year: HISTORY_START_YEAR,
            admin_history_start_year: ADMIN_HISTORY_START_YEAR,
        }
    }
}

impl BatchConfig {
    /// Load from environment variables, falling back to defaults for values
    /// that are unset or cannot be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let boundary_month = match lookup("BATCH_BOUNDARY_MONTH") {
            Some(raw) => parse_month(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Invalid BATCH_BOUNDARY_MONTH, using default");
                defaults.boundary_month
            }),
            None => defaults.boundary_month,
        };

        Self {
            boundary_month,
            history_start_year: lookup("BATCH_HISTORY_START_YEAR")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.history_start_year),
            admin_history_start_year: lookup("ADMIN_BATCH_HISTORY_START_YEAR")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.admin_history_start_year),
        }
    }
}

/// Accepts `"6"`, `"jun"` or `"June"`.
pub fn parse_month(raw: &str) -> Option<Month> {
    let raw = raw.trim();
    if let Ok(number) = raw.parse::<u8>() {
        return Month::try_from(number).ok();
    }
    raw.parse::<Month>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();
        assert_eq!(config.boundary_month, Month::June);
        assert_eq!(config.history_start_year, 2019);
        assert_eq!(config.admin_history_start_year, 2024);
    }

    #[test]
    fn test_boundary_constants_differ() {
        assert_eq!(ACADEMIC_YEAR_BOUNDARY.number_from_month(), 6);
        assert_eq!(LISTING_YEAR_BOUNDARY.number_from_month(), 7);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = BatchConfig::from_lookup(lookup_from(&[
            ("BATCH_BOUNDARY_MONTH", "7"),
            ("BATCH_HISTORY_START_YEAR", "2021"),
            ("ADMIN_BATCH_HISTORY_START_YEAR", " 2023 "),
        ]));
        assert_eq!(config.boundary_month, Month::July);
        assert_eq!(config.history_start_year, 2021);
        assert_eq!(config.admin_history_start_year, 2023);
    }

    #[test]
    fn test_from_lookup_invalid_falls_back() {
        let config = BatchConfig::from_lookup(lookup_from(&[
            ("BATCH_BOUNDARY_MONTH", "13"),
            ("BATCH_HISTORY_START_YEAR", "soon"),
        ]));
        assert_eq!(config, BatchConfig::default());
    }

    #[test]
    fn test_from_lookup_empty() {
        let config = BatchConfig::from_lookup(|_| None);
        assert_eq!(config, BatchConfig::default());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("6"), Some(Month::June));
        assert_eq!(parse_month("12"), Some(Month::December));
        assert_eq!(parse_month("july"), Some(Month::July));
        assert_eq!(parse_month("Jun"), Some(Month::June));
        assert_eq!(parse_month("0"), None);
        assert_eq!(parse_month("13"), None);
        assert_eq!(parse_month("smarch"), None);
    }
}
