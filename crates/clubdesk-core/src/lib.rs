//! # Clubdesk Core
//!
//! Core types, errors, and utilities for the Clubdesk console.
//!
//! This crate provides foundational types used throughout the workspace:
//!
//! - [`batch`]: Batch label parsing (`"2024-2025"` style cohort labels)
//! - [`errors`]: Error types for label parsing
//! - [`permissions`]: Record kinds, actions, and permission name constants
//! - [`serde`]: Custom serde deserialization helpers for API payloads
//!
//! # Example
//!
//! ```
//! use clubdesk_core::batch::{format_batch, parse_start_year};
//! use clubdesk_core::permissions::{Action, RecordKind};
//!
//! assert_eq!(parse_start_year("2024-2025"), Ok(2024));
//! assert_eq!(format_batch(2025), "2025-2026");
//! assert_eq!(RecordKind::Member.permission(Action::Edit), "members:edit");
//! ```

pub mod batch;
pub mod errors;
pub mod permissions;
pub mod serde;

// Re-export commonly used types at crate root
pub use batch::{format_batch, parse_start_year};
pub use errors::BatchError;
pub use permissions::{Action, RecordKind};
