//! Strongly-typed ID newtypes for console entities.
//!
//! The API hands out opaque string keys (serialized as `_id`). Each entity
//! gets its own wrapper so a `MemberId` cannot be passed where an `AdminId`
//! is expected.
//!
//! # Example
//!
//! ```
//! use clubdesk_models::ids::AdminId;
//!
//! let me = AdminId::new("65f1c0ffee");
//! assert!(me.matches("65f1c0ffee"));
//! assert!(!AdminId::default().matches(""));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype over an opaque string key.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing key.
            #[inline]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Get the key as a string slice.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume self and return the inner key.
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Whether the key is blank. Blank keys never identify anything.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Compare against a raw key. Blank keys never match.
            pub fn matches(&self, other: &str) -> bool {
                !self.is_empty() && self.0 == other
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            #[inline]
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl From<&str> for $name {
            #[inline]
            fn from(key: &str) -> Self {
                Self(key.to_string())
            }
        }

        impl AsRef<str> for $name {
            #[inline]
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }
    };
}

define_id!(
    /// Key of an admin account (also the key of the signed-in identity).
    AdminId
);

define_id!(
    /// Key of a club member.
    MemberId
);

define_id!(
    /// Key of a club event.
    EventId
);

define_id!(
    /// Key of a course.
    CourseId
);

define_id!(
    /// Key of a club role (a position members can hold, not an admin role).
    ClubRoleId
);
