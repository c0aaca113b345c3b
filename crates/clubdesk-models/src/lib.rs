//! # Clubdesk Models
//!
//! Domain models and DTOs for the Clubdesk console.
//!
//! This crate provides the data structures exchanged with the club API and
//! consumed by the permission and listing logic.
//!
//! # Modules
//!
//! - [`ids`]: Strongly-typed opaque keys
//! - [`value_types`]: Validated batch labels
//! - [`identity`]: The signed-in caller and admin roles
//! - [`created_by`]: Creator attribution, normalized from either API shape
//! - [`records`]: Members, events, courses, club roles, admin accounts
//! - [`events`]: Event form DTO and validation
//!
//! # Example
//!
//! ```
//! use clubdesk_models::{AdminRole, Identity, Record, Member};
//!
//! let me: Identity = serde_json::from_str(
//!     r#"{"_id": "a1", "role": "admin", "batch": "2024-2025"}"#,
//! ).unwrap();
//! assert_eq!(me.role, AdminRole::Admin);
//!
//! let member: Member = serde_json::from_str(
//!     r#"{"_id": "m1", "batch": "2024-2025", "createdBy": "a1"}"#,
//! ).unwrap();
//! assert_eq!(member.batch(), me.batch);
//! ```

pub mod created_by;
pub mod events;
pub mod identity;
pub mod ids;
pub mod records;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use created_by::CreatedBy;
pub use events::{EventForm, EventFormError};
pub use identity::{AdminRole, Identity};
pub use ids::{AdminId, ClubRoleId, CourseId, EventId, MemberId};
pub use records::{AdminAccount, ClubRole, Course, Event, EventStatus, Member, Position, Record};
pub use value_types::{BatchLabel, ValueTypeError};
