//! Wire DTOs for the sightings REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Write payloads are a separate
//! type from the read model so an `id` can never leak into a request body.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sighting record as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sighting {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub short_name: String,
    /// Airline code in `AAA-XXXX` form.
    pub airline_code: String,
    pub location: String,
    #[serde(with = "timestamp")]
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub created_user_id: Option<i64>,
    #[serde(default)]
    pub modified_user_id: Option<i64>,
}

/// Request body for `POST AirlineSighting` and `PUT AirlineSighting/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SightingPayload {
    pub name: String,
    pub short_name: String,
    pub airline_code: String,
    pub location: String,
    #[serde(with = "timestamp")]
    pub created_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_user_id: Option<i64>,
}

/// Username/password body shared by the login and register endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// ISO-8601 timestamp codec for `createdDate`.
///
/// Writes UTC with millisecond precision and a `Z` suffix. Reads RFC 3339
/// with any offset, or an offset-less date-time taken as UTC.
pub mod timestamp {
    use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
    }

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
            .map(|naive| naive.and_utc())
    }
}
