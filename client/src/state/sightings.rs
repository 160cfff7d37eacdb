//! List-view state: search box, modal form, and inline delete confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The committed search query lives in the URL (`?query=`), so the list
//! resource refetches exactly when the URL changes. Everything here is
//! page-local and discarded on navigation.

#[cfg(test)]
#[path = "sightings_test.rs"]
mod sightings_test;

use leptos::prelude::*;

use crate::net::types::Sighting;
use crate::paths;

/// URL query parameter carrying the committed search.
pub const QUERY_PARAM: &str = "query";

/// Key that commits the search box.
pub const SEARCH_COMMIT_KEY: &str = "Enter";

/// Normalize a raw `?query=` value; blank means "no search".
pub fn normalize_query(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|q| !q.is_empty()).map(str::to_owned)
}

/// Return the query to commit when `key` confirms the search box.
pub fn commit_search(key: &str, draft: &str) -> Option<String> {
    (key == SEARCH_COMMIT_KEY).then(|| draft.trim().to_owned())
}

/// List-route URL for a committed query.
pub fn search_href(query: &str) -> String {
    match normalize_query(Some(query)) {
        Some(q) => format!("{}?{QUERY_PARAM}={}", paths::SIGHTINGS, urlencoding::encode(&q)),
        None => paths::SIGHTINGS.to_owned(),
    }
}

/// Modal visibility and the record being edited, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    pub show_form: bool,
    pub editing: Option<Sighting>,
    /// Sighting awaiting inline delete confirmation.
    pub pending_delete: Option<i64>,
}

impl ListState {
    pub fn open_create(&mut self) {
        self.editing = None;
        self.show_form = true;
    }

    pub fn open_edit(&mut self, sighting: Sighting) {
        self.editing = Some(sighting);
        self.show_form = true;
    }

    pub fn close_form(&mut self) {
        self.show_form = false;
        self.editing = None;
    }

    pub fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Take the id awaiting confirmation, clearing the prompt.
    pub fn confirm_delete(&mut self) -> Option<i64> {
        self.pending_delete.take()
    }
}

/// Request sequencing for the list fetch.
///
/// A fetch fires once per distinct `(query, reload)` pair; only the newest
/// request may write its response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFetch {
    last: Option<(Option<String>, u32)>,
    latest: u64,
}

impl ListFetch {
    /// Register a trigger and return the request number when it should fetch.
    pub fn begin(&mut self, query: Option<String>, reload: u32) -> Option<u64> {
        let key = (query, reload);
        if self.last.as_ref() == Some(&key) {
            return None;
        }
        self.last = Some(key);
        self.latest += 1;
        Some(self.latest)
    }

    pub fn is_current(&self, request: u64) -> bool {
        self.latest == request
    }
}

/// Whether `request` may still apply its response. False once the page that
/// owns `fetch` has been disposed.
pub fn still_current(fetch: StoredValue<ListFetch>, request: u64) -> bool {
    fetch.try_with_value(|f| f.is_current(request)).unwrap_or(false)
}
