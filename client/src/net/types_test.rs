use super::*;
use chrono::TimeZone;

// =============================================================
// Helpers
// =============================================================

fn payload() -> SightingPayload {
    SightingPayload {
        name: "Delta Air Lines".to_owned(),
        short_name: "DAL".to_owned(),
        airline_code: "DAL-0001".to_owned(),
        location: "ATL".to_owned(),
        created_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        created_user_id: Some(7),
        modified_user_id: None,
    }
}

// =============================================================
// Sighting
// =============================================================

#[test]
fn sighting_deserializes_camel_case_with_offsetless_date() {
    let json = r#"{
        "id": 12,
        "name": "Lufthansa",
        "shortName": "DLH",
        "airlineCode": "DLH-4U20",
        "location": "FRA",
        "createdDate": "2024-03-01T09:30:00",
        "createdUserId": 3,
        "modifiedUserId": null
    }"#;
    let sighting: Sighting = serde_json::from_str(json).unwrap();
    assert_eq!(sighting.id, 12);
    assert_eq!(sighting.short_name, "DLH");
    assert_eq!(sighting.airline_code, "DLH-4U20");
    assert_eq!(sighting.created_date, Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
    assert_eq!(sighting.created_user_id, Some(3));
    assert_eq!(sighting.modified_user_id, None);
}

#[test]
fn sighting_user_ids_default_when_absent() {
    let json = r#"{"id":1,"name":"n","shortName":"s","airlineCode":"ABC-1234","location":"l","createdDate":"2024-03-01T09:30:00Z"}"#;
    let sighting: Sighting = serde_json::from_str(json).unwrap();
    assert_eq!(sighting.created_user_id, None);
    assert_eq!(sighting.modified_user_id, None);
}

#[test]
fn sighting_rejects_garbage_date() {
    let json = r#"{"id":1,"name":"n","shortName":"s","airlineCode":"ABC-1234","location":"l","createdDate":"yesterday"}"#;
    assert!(serde_json::from_str::<Sighting>(json).is_err());
}

// =============================================================
// SightingPayload
// =============================================================

#[test]
fn payload_serializes_without_id_or_absent_user_ids() {
    let value = serde_json::to_value(payload()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "name": "Delta Air Lines",
            "shortName": "DAL",
            "airlineCode": "DAL-0001",
            "location": "ATL",
            "createdDate": "2024-03-01T09:30:00.000Z",
            "createdUserId": 7
        })
    );
}

#[test]
fn payload_includes_modified_user_id_when_set() {
    let mut body = payload();
    body.modified_user_id = Some(9);
    let value = serde_json::to_value(body).unwrap();
    assert_eq!(value["modifiedUserId"], 9);
    assert_eq!(value["createdUserId"], 7);
    assert!(value.get("id").is_none());
}

// =============================================================
// timestamp
// =============================================================

#[test]
fn timestamp_parse_converts_offsets_to_utc() {
    let parsed = timestamp::parse("2024-03-01T11:30:00+02:00").unwrap();
    assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
}

#[test]
fn timestamp_parse_accepts_fractional_naive() {
    let parsed = timestamp::parse("2024-03-01T09:30:00.1234567").unwrap();
    assert_eq!(parsed.format("%H:%M:%S").to_string(), "09:30:00");
}

#[test]
fn timestamp_parse_rejects_empty() {
    assert!(timestamp::parse("  ").is_none());
}
