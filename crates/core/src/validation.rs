//! Field validators for actor and movie payloads.
//!
//! Every validator is a pure function from a raw request value to a
//! constrained domain value. Rejections carry the client-facing message in
//! their `Display` impl, so the HTTP layer can forward it verbatim.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only accepted date layout for `release_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column width of `actors.name` and `movies.title`.
pub const MAX_TEXT_LEN: usize = 100;

/// Reasons a raw field is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field required on create was absent from the body.
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{field} must be a non-empty string")]
    InvalidText { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("invalid date format. it must be {format}")]
    InvalidFormat { format: String },

    #[error("age must be Integer")]
    NotAnInteger,

    #[error("age must be a non-negative Integer")]
    NegativeAge,

    #[error("gender must be \"M\" or \"F\"")]
    InvalidGender,

    /// The body parsed as JSON but is not an object.
    #[error("request body must be a JSON object")]
    NotAnObject,
}

/// Actor gender, stored as a single upper-case character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decodes the stored column value. Goes through [`validate_gender`] so a
/// lower-case value written by hand still maps cleanly.
impl TryFrom<String> for Gender {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_gender(&value)
    }
}

/// Parse `raw` as a calendar date in `format`.
///
/// The match must be exact: re-formatting the parsed date has to reproduce
/// `raw`, which rules out unpadded fields, signs and trailing input.
pub fn validate_date(raw: &str, format: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, format)
        .ok()
        .filter(|date| date.format(format).to_string() == raw)
        .ok_or_else(|| ValidationError::InvalidFormat {
            format: format.to_string(),
        })
}

/// Coerce `raw` to a non-negative 32-bit age.
///
/// Accepts JSON integers, integral floats (`30.0`) and strings holding an
/// integer. Everything else is `NotAnInteger`.
pub fn validate_age(raw: &Value) -> Result<i32, ValidationError> {
    let age: i64 = match raw {
        Value::Number(n) => match n.as_i64() {
            Some(i) => i,
            None => match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 => f as i64,
                _ => return Err(ValidationError::NotAnInteger),
            },
        },
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::NotAnInteger)?,
        _ => return Err(ValidationError::NotAnInteger),
    };

    if age < 0 {
        return Err(ValidationError::NegativeAge);
    }

    i32::try_from(age).map_err(|_| ValidationError::NotAnInteger)
}

/// Upper-case `raw` and accept exactly `M` or `F`.
pub fn validate_gender(raw: &str) -> Result<Gender, ValidationError> {
    match raw.to_uppercase().as_str() {
        "M" => Ok(Gender::Male),
        "F" => Ok(Gender::Female),
        _ => Err(ValidationError::InvalidGender),
    }
}

/// Require a non-blank string of at most [`MAX_TEXT_LEN`] characters.
///
/// Leading and trailing whitespace is dropped from the returned value.
pub fn validate_text(field: &'static str, raw: &Value) -> Result<String, ValidationError> {
    let text = raw
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::InvalidText { field })?;

    if text.chars().count() > MAX_TEXT_LEN {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        });
    }

    Ok(text.to_string())
}
