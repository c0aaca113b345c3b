//! The signed-in caller and their admin role.

use crate::ids::AdminId;
use clubdesk_core::serde::deserialize_string_or_null;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Console role of an admin account.
///
/// Any value the API sends that is not `admin` or `superadmin` becomes
/// [`AdminRole::Unknown`], which is denied every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Superadmin,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Superadmin => "superadmin",
            AdminRole::Admin => "admin",
            AdminRole::Unknown => "unknown",
        }
    }

    /// Label used by listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            AdminRole::Superadmin => "Super Admin",
            AdminRole::Admin => "Admin",
            AdminRole::Unknown => "Unknown",
        }
    }

    pub fn is_superadmin(&self) -> bool {
        matches!(self, AdminRole::Superadmin)
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the signed-in caller as returned by `GET /admin/me`.
///
/// Missing fields deserialize to blanks, which the permission checks treat
/// as non-matching.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: AdminId,
    #[serde(default)]
    pub role: AdminRole,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub batch: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub email: String,
}

impl Identity {
    pub fn new(
        id: impl Into<AdminId>,
        role: AdminRole,
        batch: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            batch: batch.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
