//! Record kinds, actions, and permission name constants.
//!
//! Permission names follow the `"<collection>:<action>"` convention used by
//! the API. They are attached to log events so a denied decision can be
//! traced back to the button it hid.
//!
//! # Example
//!
//! ```
//! use clubdesk_core::permissions::{self, Action, RecordKind};
//!
//! assert_eq!(RecordKind::Course.permission(Action::Delete), permissions::COURSES_DELETE);
//! assert_eq!("admin".parse::<RecordKind>(), Ok(RecordKind::Admin));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Members permissions
// =============================================================================

pub const MEMBERS_CREATE: &str = "members:create";
pub const MEMBERS_EDIT: &str = "members:edit";
pub const MEMBERS_DELETE: &str = "members:delete";

// =============================================================================
// Events permissions
// =============================================================================

pub const EVENTS_CREATE: &str = "events:create";
pub const EVENTS_EDIT: &str = "events:edit";
pub const EVENTS_DELETE: &str = "events:delete";

// =============================================================================
// Courses permissions
// =============================================================================

pub const COURSES_CREATE: &str = "courses:create";
pub const COURSES_EDIT: &str = "courses:edit";
pub const COURSES_DELETE: &str = "courses:delete";

// =============================================================================
// Roles permissions
// =============================================================================

pub const ROLES_CREATE: &str = "roles:create";
pub const ROLES_EDIT: &str = "roles:edit";
pub const ROLES_DELETE: &str = "roles:delete";

// =============================================================================
// Admin accounts permissions
// =============================================================================

pub const ADMINS_CREATE: &str = "admins:create";
pub const ADMINS_EDIT: &str = "admins:edit";
pub const ADMINS_DELETE: &str = "admins:delete";

/// A mutation the console can offer on a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Edit,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Edit => "edit",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" | "add" => Ok(Action::Create),
            "edit" | "update" => Ok(Action::Edit),
            "delete" | "remove" => Ok(Action::Delete),
            other => Err(UnknownName(other.to_string())),
        }
    }
}

/// The five record collections managed by the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Member,
    Event,
    Course,
    Role,
    Admin,
}

impl RecordKind {
    pub fn all() -> [RecordKind; 5] {
        [
            RecordKind::Member,
            RecordKind::Event,
            RecordKind::Course,
            RecordKind::Role,
            RecordKind::Admin,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Member => "member",
            RecordKind::Event => "event",
            RecordKind::Course => "course",
            RecordKind::Role => "role",
            RecordKind::Admin => "admin",
        }
    }

    /// Whether edit/delete on this kind also requires the caller to be the
    /// record's creator.
    pub fn requires_creator(&self) -> bool {
        matches!(self, RecordKind::Course | RecordKind::Role)
    }

    /// The permission name for an action on this kind.
    pub fn permission(&self, action: Action) -> &'static str {
        match (self, action) {
            (RecordKind::Member, Action::Create) => MEMBERS_CREATE,
            (RecordKind::Member, Action::Edit) => MEMBERS_EDIT,
            (RecordKind::Member, Action::Delete) => MEMBERS_DELETE,
            (RecordKind::Event, Action::Create) => EVENTS_CREATE,
            (RecordKind::Event, Action::Edit) => EVENTS_EDIT,
            (RecordKind::Event, Action::Delete) => EVENTS_DELETE,
            (RecordKind::Course, Action::Create) => COURSES_CREATE,
            (RecordKind::Course, Action::Edit) => COURSES_EDIT,
            (RecordKind::Course, Action::Delete) => COURSES_DELETE,
            (RecordKind::Role, Action::Create) => ROLES_CREATE,
            (RecordKind::Role, Action::Edit) => ROLES_EDIT,
            (RecordKind::Role, Action::Delete) => ROLES_DELETE,
            (RecordKind::Admin, Action::Create) => ADMINS_CREATE,
            (RecordKind::Admin, Action::Edit) => ADMINS_EDIT,
            (RecordKind::Admin, Action::Delete) => ADMINS_DELETE,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "member" | "members" => Ok(RecordKind::Member),
            "event" | "events" => Ok(RecordKind::Event),
            "course" | "courses" => Ok(RecordKind::Course),
            "role" | "roles" => Ok(RecordKind::Role),
            "admin" | "admins" => Ok(RecordKind::Admin),
            other => Err(UnknownName(other.to_string())),
        }
    }
}

/// Returned when a kind or action name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown name: '{0}'")]
pub struct UnknownName(pub String);
