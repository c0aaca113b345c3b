//! Creator attribution attached to records.
//!
//! The API stores `createdBy` either as a populated reference object
//! (`{"_id": .., "name": .., "email": ..}`) or as a bare string, which may be
//! an admin key, a name or an email. Both shapes deserialize into
//! [`CreatedBy`] so the rest of the code never inspects raw JSON.

use clubdesk_core::serde::deserialize_optional_string;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedBy {
    Reference {
        #[serde(
            rename = "_id",
            alias = "id",
            default,
            deserialize_with = "deserialize_optional_string",
            skip_serializing_if = "Option::is_none"
        )]
        id: Option<String>,
        #[serde(
            default,
            deserialize_with = "deserialize_optional_string",
            skip_serializing_if = "Option::is_none"
        )]
        name: Option<String>,
        #[serde(
            default,
            deserialize_with = "deserialize_optional_string",
            skip_serializing_if = "Option::is_none"
        )]
        email: Option<String>,
    },
    RawId(String),
}

impl CreatedBy {
    pub fn reference(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let non_blank = |s: String| Some(s).filter(|s| !s.trim().is_empty());
        CreatedBy::Reference {
            id: non_blank(id.into()),
            name: non_blank(name.into()),
            email: non_blank(email.into()),
        }
    }

    pub fn raw(value: impl Into<String>) -> Self {
        CreatedBy::RawId(value.into())
    }

    /// Creator key, if one was recorded.
    pub fn id(&self) -> Option<&str> {
        match self {
            CreatedBy::Reference { id, .. } => id.as_deref(),
            CreatedBy::RawId(raw) => Some(raw.as_str()).filter(|s| !s.trim().is_empty()),
        }
    }

    /// "Added by" text for listings.
    pub fn display_name(&self) -> &str {
        match self {
            CreatedBy::Reference { name: Some(name), .. } => name,
            CreatedBy::Reference { .. } => "Unknown",
            CreatedBy::RawId(raw) if !raw.trim().is_empty() => raw,
            CreatedBy::RawId(_) => "Unknown",
        }
    }

    /// Email shown next to the creator name, when the reference has one.
    pub fn email(&self) -> Option<&str> {
        match self {
            CreatedBy::Reference { email, .. } => email.as_deref(),
            CreatedBy::RawId(_) => None,
        }
    }
}
