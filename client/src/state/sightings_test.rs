use super::*;
use crate::net::api::list_endpoint;
use chrono::{TimeZone, Utc};

fn sighting(id: i64) -> Sighting {
    Sighting {
        id,
        name: "Delta".to_owned(),
        short_name: "DAL".to_owned(),
        airline_code: "DAL-0001".to_owned(),
        location: "ATL".to_owned(),
        created_date: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        created_user_id: Some(1),
        modified_user_id: None,
    }
}

// =============================================================
// Search
// =============================================================

#[test]
fn typing_does_not_commit_search() {
    assert_eq!(commit_search("D", "D"), None);
    assert_eq!(commit_search("Backspace", "Delt"), None);
}

#[test]
fn enter_commits_search_to_url_and_search_endpoint() {
    let committed = commit_search("Enter", "Delta").unwrap();
    assert_eq!(search_href(&committed), "/AirlineSightings?query=Delta");

    let query = normalize_query(Some(&committed));
    assert_eq!(list_endpoint(query.as_deref()), "AirlineSighting/search?query=Delta");
}

#[test]
fn committing_blank_search_clears_query() {
    let committed = commit_search("Enter", "   ").unwrap();
    assert_eq!(search_href(&committed), "/AirlineSightings");
    assert_eq!(normalize_query(Some(&committed)), None);
}

#[test]
fn search_href_encodes_query() {
    assert_eq!(search_href("Air France"), "/AirlineSightings?query=Air%20France");
}

#[test]
fn normalize_query_drops_blank() {
    assert_eq!(normalize_query(None), None);
    assert_eq!(normalize_query(Some("")), None);
    assert_eq!(normalize_query(Some(" Delta ")), Some("Delta".to_owned()));
}

// =============================================================
// ListState
// =============================================================

#[test]
fn open_create_clears_editing() {
    let mut state = ListState::default();
    state.open_edit(sighting(1));
    state.close_form();
    state.open_create();
    assert!(state.show_form);
    assert!(state.editing.is_none());
}

#[test]
fn open_edit_keeps_selected_record() {
    let mut state = ListState::default();
    state.open_edit(sighting(9));
    assert!(state.show_form);
    assert_eq!(state.editing.as_ref().map(|s| s.id), Some(9));
}

#[test]
fn close_form_resets_editing() {
    let mut state = ListState::default();
    state.open_edit(sighting(2));
    state.close_form();
    assert_eq!(state, ListState::default());
}

#[test]
fn delete_requires_confirmation() {
    let mut state = ListState::default();
    state.request_delete(4);
    assert_eq!(state.pending_delete, Some(4));

    state.cancel_delete();
    assert_eq!(state.confirm_delete(), None);

    state.request_delete(4);
    assert_eq!(state.confirm_delete(), Some(4));
    assert_eq!(state.pending_delete, None);
}

// =============================================================
// ListFetch
// =============================================================

#[test]
fn first_trigger_fetches() {
    let mut fetch = ListFetch::default();
    assert_eq!(fetch.begin(None, 0), Some(1));
    assert!(fetch.is_current(1));
}

#[test]
fn same_query_committed_twice_fetches_once() {
    let mut fetch = ListFetch::default();
    let query = normalize_query(commit_search("Enter", "Delta").as_deref());
    assert_eq!(fetch.begin(query.clone(), 0), Some(1));
    assert_eq!(fetch.begin(query, 0), None);
}

#[test]
fn new_query_fetches_exactly_once() {
    let mut fetch = ListFetch::default();
    fetch.begin(None, 0);
    let query = normalize_query(commit_search("Enter", "Delta").as_deref());
    assert_eq!(fetch.begin(query.clone(), 0), Some(2));
    assert_eq!(fetch.begin(query, 0), None);
}

#[test]
fn reload_refetches_same_query() {
    let mut fetch = ListFetch::default();
    fetch.begin(Some("Delta".to_owned()), 0);
    assert_eq!(fetch.begin(Some("Delta".to_owned()), 1), Some(2));
}

#[test]
fn older_response_is_dropped() {
    let mut fetch = ListFetch::default();
    let first = fetch.begin(None, 0).unwrap();
    let second = fetch.begin(Some("Delta".to_owned()), 0).unwrap();
    assert!(!fetch.is_current(first));
    assert!(fetch.is_current(second));
}

#[test]
fn still_current_tracks_live_owner() {
    let owner = Owner::new();
    owner.set();
    let mut state = ListFetch::default();
    let request = state.begin(None, 0).unwrap();
    let fetch = StoredValue::new(state);

    assert!(still_current(fetch, request));
    fetch.update_value(|f| {
        f.begin(Some("Delta".to_owned()), 0);
    });
    assert!(!still_current(fetch, request));
}

#[test]
fn still_current_after_dispose_is_false() {
    let owner = Owner::new();
    owner.set();
    let mut state = ListFetch::default();
    let request = state.begin(None, 0).unwrap();
    let fetch = StoredValue::new(state);

    owner.cleanup();
    assert!(!still_current(fetch, request));
}
