//! # Clubdesk Access
//!
//! Client-side batch and permission logic for the Clubdesk console.
//!
//! - [`batch_clock`]: Which batch is active on a given date
//! - [`creator`]: Whether the caller created a record
//! - [`evaluator`]: Create/edit/delete decisions for every record kind
//! - [`batch_options`]: Batch picker contents per role
//! - [`listing`]: Filters, default batch, founder ordering, hidden entries
//!
//! Everything here is a pure function of its inputs. "Now" is always passed
//! in, never read from the system clock.

pub mod batch_clock;
pub mod batch_options;
pub mod creator;
pub mod evaluator;
pub mod listing;

pub use batch_clock::BatchClock;
pub use batch_options::batch_options;
pub use creator::{CreatorMatch, creator_match, is_created_by};
pub use evaluator::{Decision, Denial, PermissionEvaluator};
pub use listing::{
    AdminFilter, EventFilter, FounderOrdering, HiddenEntries, ListFilter, MemberFilter,
    distinct_batches, latest_batch, split_admins,
};
