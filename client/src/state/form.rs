//! Create/update form model for sighting records.
//!
//! DESIGN
//! ======
//! The form holds raw input strings. `validate` turns them into a
//! `ValidSighting` or per-field error messages; `plan_submit` then decides
//! between create and update and stamps the user-id fields.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use regex::Regex;

use crate::net::api::{SIGHTINGS_RESOURCE, sighting_endpoint};
use crate::net::types::{Sighting, SightingPayload};

pub const NAME_MAX_CHARS: usize = 150;
pub const SHORT_NAME_MAX_CHARS: usize = 5;
pub const LOCATION_MAX_CHARS: usize = 200;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_LONG: &str = "Name must be at most 150 characters";
pub const SHORT_NAME_INVALID: &str = "Short Name is required. Maximum 5 characters";
pub const AIRLINE_CODE_REQUIRED: &str = "Airline Code is required. Expected format: ABC-1234";
pub const AIRLINE_CODE_INVALID: &str = "Invalid Airline Code format. Expected format: ABC-1234";
pub const LOCATION_REQUIRED: &str = "Location is required";
pub const LOCATION_TOO_LONG: &str = "Location must be at most 200 characters";
pub const CREATED_DATE_REQUIRED: &str = "Created Date is required";
pub const CREATED_DATE_INVALID: &str = "Created Date must be a valid datetime in the past";

/// Heading for the created timestamp in the list and detail views.
pub const CREATED_DATE_LABEL: &str = "Created Date";

/// `datetime-local` input formats, with and without seconds.
const LOCAL_INPUT_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

static AIRLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}-[A-Z0-9]{4}$").expect("airline code pattern compiles"));

/// Raw form inputs, one string per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SightingForm {
    pub name: String,
    pub short_name: String,
    pub airline_code: String,
    pub location: String,
    /// `datetime-local` value in the browser's time zone.
    pub created_date: String,
}

/// Per-field validation messages; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub short_name: Option<&'static str>,
    pub airline_code: Option<&'static str>,
    pub location: Option<&'static str>,
    pub created_date: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.short_name.is_none()
            && self.airline_code.is_none()
            && self.location.is_none()
            && self.created_date.is_none()
    }
}

/// Form contents that passed validation, trimmed and typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidSighting {
    pub name: String,
    pub short_name: String,
    pub airline_code: String,
    pub location: String,
    pub created_date: DateTime<Utc>,
}

impl SightingForm {
    /// Pre-populate the form from an existing record.
    pub fn from_sighting(sighting: &Sighting) -> Self {
        Self {
            name: sighting.name.clone(),
            short_name: sighting.short_name.clone(),
            airline_code: sighting.airline_code.clone(),
            location: sighting.location.clone(),
            created_date: to_local_input(&sighting.created_date),
        }
    }

    /// Validate every field against `now`.
    ///
    /// # Errors
    ///
    /// Returns the message for each failing field.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<ValidSighting, FormErrors> {
        let name = self.name.trim();
        let short_name = self.short_name.trim();
        let airline_code = self.airline_code.trim();
        let location = self.location.trim();
        let created_date = parse_local_input(&self.created_date);

        let errors = FormErrors {
            name: check_text(name, NAME_MAX_CHARS, NAME_REQUIRED, NAME_TOO_LONG),
            short_name: check_text(short_name, SHORT_NAME_MAX_CHARS, SHORT_NAME_INVALID, SHORT_NAME_INVALID),
            airline_code: if airline_code.is_empty() {
                Some(AIRLINE_CODE_REQUIRED)
            } else if AIRLINE_CODE.is_match(airline_code) {
                None
            } else {
                Some(AIRLINE_CODE_INVALID)
            },
            location: check_text(location, LOCATION_MAX_CHARS, LOCATION_REQUIRED, LOCATION_TOO_LONG),
            created_date: if self.created_date.trim().is_empty() {
                Some(CREATED_DATE_REQUIRED)
            } else if created_date.is_some_and(|date| date < now) {
                None
            } else {
                Some(CREATED_DATE_INVALID)
            },
        };

        match created_date {
            Some(created_date) if errors.is_empty() => Ok(ValidSighting {
                name: name.to_owned(),
                short_name: short_name.to_owned(),
                airline_code: airline_code.to_owned(),
                location: location.to_owned(),
                created_date,
            }),
            _ => Err(errors),
        }
    }
}

fn check_text(value: &str, max_chars: usize, required: &'static str, too_long: &'static str) -> Option<&'static str> {
    if value.is_empty() {
        Some(required)
    } else if value.chars().count() > max_chars {
        Some(too_long)
    } else {
        None
    }
}

/// Parse a `datetime-local` value in the browser's time zone.
pub fn parse_local_input(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let naive = LOCAL_INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Render a timestamp as a `datetime-local` value in the browser's time zone.
pub fn to_local_input(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Render a timestamp for tables and detail views.
pub fn display_local(value: &DateTime<Utc>) -> String {
    value.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// A validated write, ready to dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    Create(SightingPayload),
    Update { id: i64, payload: SightingPayload },
}

impl SubmitAction {
    pub fn method(&self) -> &'static str {
        match self {
            Self::Create(_) => "POST",
            Self::Update { .. } => "PUT",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Create(_) => SIGHTINGS_RESOURCE.to_owned(),
            Self::Update { id, .. } => sighting_endpoint(*id),
        }
    }

    pub fn payload(&self) -> &SightingPayload {
        match self {
            Self::Create(payload) | Self::Update { payload, .. } => payload,
        }
    }
}

/// Build the write for `valid`: an update when `editing` is set, else a create.
///
/// Creates carry `createdUserId = user_id`. Updates keep the original
/// record's `createdUserId` and set `modifiedUserId = user_id`.
pub fn plan_submit(valid: ValidSighting, editing: Option<&Sighting>, user_id: Option<i64>) -> SubmitAction {
    let ValidSighting { name, short_name, airline_code, location, created_date } = valid;
    let payload = SightingPayload {
        name,
        short_name,
        airline_code,
        location,
        created_date,
        created_user_id: user_id,
        modified_user_id: None,
    };
    match editing {
        None => SubmitAction::Create(payload),
        Some(original) => SubmitAction::Update {
            id: original.id,
            payload: SightingPayload {
                created_user_id: original.created_user_id,
                modified_user_id: user_id,
                ..payload
            },
        },
    }
}
