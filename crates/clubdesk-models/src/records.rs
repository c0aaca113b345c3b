//! Records managed by the console.
//!
//! Only the fields the console reads are modelled; anything else the API
//! returns is ignored during deserialization.

use crate::created_by::CreatedBy;
use crate::identity::{AdminRole, Identity};
use crate::ids::{AdminId, ClubRoleId, CourseId, EventId, MemberId};
use clubdesk_core::permissions::RecordKind;
use clubdesk_core::serde::{
    deserialize_optional_string, deserialize_string_or_null, deserialize_string_or_number,
};
use serde::{Deserialize, Serialize};

/// Read access shared by every record kind.
///
/// Permission checks and listings are written against this trait so the
/// five collections share one implementation.
pub trait Record {
    const KIND: RecordKind;

    fn key(&self) -> &str;

    /// Raw batch label as stored by the API.
    fn batch(&self) -> &str;

    fn created_by(&self) -> Option<&CreatedBy>;

    /// Admin role; only admin accounts carry one.
    fn role(&self) -> Option<AdminRole> {
        None
    }

    /// Contact email, for kinds that have one.
    fn email(&self) -> Option<&str> {
        None
    }

    /// Name used by search filters.
    fn name(&self) -> &str;
}

// ============================================================================
// Member
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: MemberId,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub batch: String,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub gender: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
}

impl Record for Member {
    const KIND: RecordKind = RecordKind::Member;

    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn batch(&self) -> &str {
        &self.batch
    }

    fn created_by(&self) -> Option<&CreatedBy> {
        self.created_by.as_ref()
    }

    fn email(&self) -> Option<&str> {
        Some(self.email.as_str()).filter(|e| !e.trim().is_empty())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Event
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Other => "other",
        }
    }
}

impl std::str::FromStr for EventStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => EventStatus::Upcoming,
            "ongoing" => EventStatus::Ongoing,
            "completed" => EventStatus::Completed,
            "cancelled" => EventStatus::Cancelled,
            _ => EventStatus::Other,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: EventId,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub batch: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub speaker: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
}

impl Record for Event {
    const KIND: RecordKind = RecordKind::Event;

    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn batch(&self) -> &str {
        &self.batch
    }

    fn created_by(&self) -> Option<&CreatedBy> {
        self.created_by.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Course
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: CourseId,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub batch: String,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
}

impl Record for Course {
    const KIND: RecordKind = RecordKind::Course;

    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn batch(&self) -> &str {
        &self.batch
    }

    fn created_by(&self) -> Option<&CreatedBy> {
        self.created_by.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Club role
// ============================================================================

/// A position offered to members in a batch (e.g. "Treasurer").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRole {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: ClubRoleId,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub batch: String,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
}

impl Record for ClubRole {
    const KIND: RecordKind = RecordKind::Role;

    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn batch(&self) -> &str {
        &self.batch
    }

    fn created_by(&self) -> Option<&CreatedBy> {
        self.created_by.as_ref()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ============================================================================
// Admin account
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: AdminId,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub email: String,
    #[serde(default)]
    pub role: AdminRole,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub batch: String,
    #[serde(default, deserialize_with = "deserialize_string_or_number")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub gender: Option<String>,
    #[serde(default)]
    pub created_by: Option<CreatedBy>,
}

impl AdminAccount {
    /// The account viewed as a caller identity.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            role: self.role,
            batch: self.batch.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

impl Record for AdminAccount {
    const KIND: RecordKind = RecordKind::Admin;

    fn key(&self) -> &str {
        self.id.as_str()
    }

    fn batch(&self) -> &str {
        &self.batch
    }

    fn created_by(&self) -> Option<&CreatedBy> {
        self.created_by.as_ref()
    }

    fn role(&self) -> Option<AdminRole> {
        Some(self.role)
    }

    fn email(&self) -> Option<&str> {
        Some(self.email.as_str()).filter(|e| !e.trim().is_empty())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_from_api_json() {
        let json = r#"{
            "_id": "m1",
            "name": "Kavya",
            "email": "kavya@club.org",
            "batch": "2024-2025",
            "year": 2,
            "gender": "Female",
            "position": {"name": "Treasurer", "category": "Office Bearer"},
            "createdBy": {"_id": "a1", "name": "Asha", "email": "asha@club.org"},
            "photo": "ignored.png"
        }"#;
        let member: Member = serde_json::from_str(json).unwrap();
        assert_eq!(member.key(), "m1");
        assert_eq!(member.year.as_deref(), Some("2"));
        assert_eq!(
            member.position.as_ref().and_then(|p| p.category.as_deref()),
            Some("Office Bearer")
        );
        assert_eq!(member.created_by().and_then(CreatedBy::id), Some("a1"));
        assert_eq!(Member::KIND, RecordKind::Member);
    }

    #[test]
    fn test_course_with_raw_creator() {
        let json = r#"{"_id": "c1", "name": "Rust 101", "createdBy": "a1"}"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.created_by, Some(CreatedBy::raw("a1")));
        assert_eq!(course.batch(), "");
    }

    #[test]
    fn test_event_status() {
        let event: Event = serde_json::from_str(r#"{"_id": "e1", "status": "ongoing"}"#).unwrap();
        assert_eq!(event.status, EventStatus::Ongoing);
        let event: Event = serde_json::from_str(r#"{"_id": "e1", "status": "postponed"}"#).unwrap();
        assert_eq!(event.status, EventStatus::Other);
        let event: Event = serde_json::from_str(r#"{"_id": "e1"}"#).unwrap();
        assert_eq!(event.status, EventStatus::Upcoming);
        assert_eq!("Cancelled".parse::<EventStatus>(), Ok(EventStatus::Cancelled));
    }

    #[test]
    fn test_admin_account_role_and_identity() {
        let json = r#"{"_id": "a2", "name": "Ravi", "email": "ravi@club.org",
                       "role": "superadmin", "batch": "2023-2024", "createdBy": null}"#;
        let account: AdminAccount = serde_json::from_str(json).unwrap();
        assert_eq!(account.role(), Some(AdminRole::Superadmin));
        assert_eq!(account.created_by(), None);

        let identity = account.identity();
        assert_eq!(identity.id.as_str(), "a2");
        assert_eq!(identity.batch, "2023-2024");
    }

    #[test]
    fn test_blank_email_is_none() {
        let member = Member::default();
        assert_eq!(member.email(), None);
        assert_eq!(Event::default().email(), None);
        assert_eq!(Course::default().role(), None);
    }
}
