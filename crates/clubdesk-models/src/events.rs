//! Event form DTO and its validation.
//!
//! The create and edit event screens share one form. Field presence is
//! checked with `validator`; the schedule rules (date not in the past, end
//! after start) need "today" and are checked by [`EventForm::validate_for`].

use crate::records::EventStatus;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Default start of a new event (5:00 PM).
pub fn default_from_time() -> NaiveTime {
    NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default()
}

/// Default end of a new event (6:00 PM).
pub fn default_to_time() -> NaiveTime {
    NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum EventFormError {
    #[error("Please fill all required fields")]
    MissingFields(#[from] ValidationErrors),

    #[error("Event date cannot be in the past")]
    DateInPast { date: NaiveDate, today: NaiveDate },

    #[error("End time must be after start time")]
    EndNotAfterStart { from: NaiveTime, to: NaiveTime },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[validate(length(min = 1, message = "Name is required"))]
    #[serde(default)]
    pub name: String,
    #[validate(length(min = 1, message = "Batch is required"))]
    #[serde(default)]
    pub batch: String,
    #[validate(required(message = "Date is required"))]
    pub date: Option<NaiveDate>,
    #[validate(required(message = "Start time is required"))]
    #[serde(default, with = "hhmm")]
    pub from_time: Option<NaiveTime>,
    #[validate(required(message = "End time is required"))]
    #[serde(default, with = "hhmm")]
    pub to_time: Option<NaiveTime>,
    #[validate(length(min = 1, message = "Venue is required"))]
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub speaker: String,
    #[validate(length(min = 1, message = "Description is required"))]
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: EventStatus,
}

impl EventForm {
    /// A blank form dated `today` in `batch`, running 5 PM to 6 PM.
    pub fn new(today: NaiveDate, batch: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            batch: batch.into(),
            date: Some(today),
            from_time: Some(default_from_time()),
            to_time: Some(default_to_time()),
            venue: String::new(),
            speaker: String::new(),
            description: String::new(),
            status: EventStatus::Upcoming,
        }
    }

    /// Run field validation, then the schedule rules relative to `today`.
    pub fn validate_for(&self, today: NaiveDate) -> Result<(), EventFormError> {
        self.validate()?;

        // Presence was checked above
        let (Some(date), Some(from), Some(to)) = (self.date, self.from_time, self.to_time) else {
            return Ok(());
        };

        if date < today {
            return Err(EventFormError::DateInPast { date, today });
        }
        if from >= to {
            return Err(EventFormError::EndNotAfterStart { from, to });
        }
        Ok(())
    }

    /// The `time` string sent to the API, e.g. `"5:00 PM - 6:00 PM"`.
    pub fn combined_time(&self) -> Option<String> {
        match (self.from_time, self.to_time) {
            (Some(from), Some(to)) => Some(format!("{} - {}", twelve_hour(from), twelve_hour(to))),
            _ => None,
        }
    }
}

fn twelve_hour(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// `"HH:MM"` strings as used by HTML time inputs.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        match opt {
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => NaiveTime::parse_from_str(s.trim(), FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
