//! Active-batch derivation.
//!
//! A batch becomes active at the boundary month of its start year and stays
//! active until the boundary month of the following year. With a June
//! boundary, 2025-05-31 is still in `"2024-2025"` and 2025-06-01 starts
//! `"2025-2026"`.

use chrono::{Datelike, Month};
use clubdesk_config::BatchConfig;
use clubdesk_config::batch::ACADEMIC_YEAR_BOUNDARY;
use clubdesk_core::parse_start_year;
use clubdesk_models::{AdminRole, BatchLabel, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchClock {
    boundary: Month,
}

impl Default for BatchClock {
    fn default() -> Self {
        Self::new(ACADEMIC_YEAR_BOUNDARY)
    }
}

impl BatchClock {
    pub const fn new(boundary: Month) -> Self {
        Self { boundary }
    }

    pub fn from_config(config: &BatchConfig) -> Self {
        Self::new(config.boundary_month)
    }

    pub fn boundary(&self) -> Month {
        self.boundary
    }

    /// Start year of the batch active at `now`.
    pub fn current_start_year<D: Datelike>(&self, now: &D) -> i32 {
        if now.month() >= self.boundary.number_from_month() {
            now.year()
        } else {
            now.year() - 1
        }
    }

    /// Label of the batch active at `now`.
    pub fn current_batch<D: Datelike>(&self, now: &D) -> BatchLabel {
        BatchLabel::from_start_year(self.current_start_year(now))
    }

    /// Whether a raw label names the batch active at `now`.
    pub fn is_current<D: Datelike>(&self, label: &str, now: &D) -> bool {
        parse_start_year(label).is_ok_and(|year| year == self.current_start_year(now))
    }

    /// Display status of a record: superadmin accounts are always active,
    /// everything else only while its batch is the active one.
    pub fn is_active<R: Record, D: Datelike>(&self, record: &R, now: &D) -> bool {
        if record.role() == Some(AdminRole::Superadmin) {
            return true;
        }
        self.is_current(record.batch(), now)
    }
}
