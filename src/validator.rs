use chrono::NaiveDate;
use clubdesk_models::{EventForm, EventFormError};
use validator::ValidationErrors;

/// Flatten field errors into one sorted, comma separated line.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>();
    messages.sort();
    messages.join(", ")
}

/// One-line verdict on an event form as of `today`.
pub fn describe_event_form(form: &EventForm, today: NaiveDate) -> String {
    match form.validate_for(today) {
        Ok(()) => {
            let date = form.date.map(|d| d.to_string()).unwrap_or_default();
            let time = form.combined_time().unwrap_or_default();
            format!("valid: {} on {}, {} ({} batch)", form.name, date, time, form.batch)
        }
        Err(err) => match &err {
            EventFormError::MissingFields(errors) => {
                format!("invalid: {} ({})", err, format_errors(errors))
            }
            _ => format!("invalid: {}", err),
        },
    }
}
