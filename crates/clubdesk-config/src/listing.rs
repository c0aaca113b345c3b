//! Organisation-specific listing data.
//!
//! Founder ordering and hidden entries are data about one club, not
//! behaviour, so they come from the environment instead of literals.
//!
//! - `FOUNDER_EMAILS`: comma separated, listed superadmins sort first in this order
//! - `HIDDEN_ROLE_NAMES`: comma separated role names never shown in role listings
//! - `HIDDEN_COURSE_KEYWORDS`: comma separated, courses whose name contains one are hidden

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingConfig {
    pub founder_emails: Vec<String>,
    pub hidden_role_names: Vec<String>,
    pub hidden_course_keywords: Vec<String>,
}

impl ListingConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let list = |key: &str| lookup(key).map(|v| split_list(&v)).unwrap_or_default();

        Self {
            founder_emails: list("FOUNDER_EMAILS"),
            hidden_role_names: list("HIDDEN_ROLE_NAMES"),
            hidden_course_keywords: list("HIDDEN_COURSE_KEYWORDS"),
        }
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
