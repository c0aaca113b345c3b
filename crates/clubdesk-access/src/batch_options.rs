//! Batch picker contents.

use crate::batch_clock::BatchClock;
use chrono::{Datelike, NaiveDate};
use clubdesk_models::{AdminRole, BatchLabel, Identity};

/// Labels offered to `me` in a batch picker, newest first.
///
/// Admins only ever get the active batch. Superadmins get every batch from
/// `history_start_year` up to the one starting next calendar year.
pub fn batch_options(
    me: &Identity,
    clock: &BatchClock,
    today: NaiveDate,
    history_start_year: i32,
) -> Vec<BatchLabel> {
    match me.role {
        AdminRole::Admin => vec![clock.current_batch(&today)],
        AdminRole::Superadmin => history_range(history_start_year, today.year() + 1),
        AdminRole::Unknown => Vec::new(),
    }
}

/// Labels from `first` to `last` start year inclusive, newest first.
pub fn history_range(first: i32, last: i32) -> Vec<BatchLabel> {
    (first..=last)
        .rev()
        .map(BatchLabel::from_start_year)
        .collect()
}
