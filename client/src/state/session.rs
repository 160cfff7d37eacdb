//! Persistent session-token store.
//!
//! The token lives in `localStorage` under [`SESSION_KEY`]. This module only
//! reads, writes, and clears it; validity is never checked here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage;

/// `localStorage` key holding the session token.
pub const SESSION_KEY: &str = "user";

/// Read the stored token. Blank values count as no token.
pub fn load_token() -> Option<String> {
    storage::load(SESSION_KEY).and_then(normalize_token)
}

/// Persist `token` as the current session.
pub fn store_token(token: &str) {
    storage::save(SESSION_KEY, token.trim());
}

/// Forget the current session.
pub fn clear_token() {
    storage::remove(SESSION_KEY);
}

fn normalize_token(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
