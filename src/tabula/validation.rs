//! Draft validation.
//!
//! The only rule beyond "required field present" is that a present field must
//! parse to its column type: the date to a real calendar date, the value to a
//! finite number. All failures are collected so the form can show every
//! message at once.

use crate::error::ValidationErrors;
use crate::model::{Draft, Field, RecordFields, DISPLAY_DATE, ISO_DATE};
use chrono::NaiveDate;

pub const NAME_REQUIRED: &str = "Enter a name";
pub const DATE_REQUIRED: &str = "Pick a date";
pub const DATE_INVALID: &str = "Enter a valid date";
pub const VALUE_REQUIRED: &str = "Enter a number";
pub const VALUE_INVALID: &str = "Enter a valid number";

/// Accepted input formats, tried in order. `%d`/`%m` also accept unpadded digits.
const INPUT_DATE_FORMATS: [&str; 3] = [ISO_DATE, DISPLAY_DATE, "%d/%m/%Y"];

pub fn validate(draft: &Draft) -> Result<RecordFields, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = draft.name.trim();
    if name.is_empty() {
        errors.add(Field::Name, NAME_REQUIRED);
    }

    let date = match draft.date.trim() {
        "" => {
            errors.add(Field::Date, DATE_REQUIRED);
            None
        }
        raw => parse_date(raw).or_else(|| {
            errors.add(Field::Date, DATE_INVALID);
            None
        }),
    };

    let value = match draft.value.trim() {
        "" => {
            errors.add(Field::Value, VALUE_REQUIRED);
            None
        }
        raw => parse_value(raw).or_else(|| {
            errors.add(Field::Value, VALUE_INVALID);
            None
        }),
    };

    match (date, value) {
        (Some(date), Some(value)) if errors.is_empty() => Ok(RecordFields {
            name: name.to_string(),
            date,
            value,
        }),
        _ => Err(errors),
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// Parses a number, accepting a single decimal comma (`4,5`) in place of the
/// point. Anything that reads like digit grouping (`1,000`, `1,000.5`,
/// `1,000,000`) is rejected rather than guessed at.
pub fn parse_value(raw: &str) -> Option<f64> {
    let normalized = match raw.split_once(',') {
        None => raw.to_string(),
        Some((whole, fraction)) => {
            if raw.contains('.') || fraction.contains(',') || looks_grouped(whole, fraction) {
                return None;
            }
            format!("{}.{}", whole, fraction)
        }
    };
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// `1,000` but not `0,125`.
fn looks_grouped(whole: &str, fraction: &str) -> bool {
    let digits = whole.trim_start_matches(['-', '+']);
    fraction.len() == 3
        && fraction.bytes().all(|b| b.is_ascii_digit())
        && !digits.is_empty()
        && digits.bytes().any(|b| b != b'0')
}
