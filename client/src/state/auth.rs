//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the navigation bar. The state mirrors the
//! session store: it starts in a restoring phase until the browser has read
//! `localStorage`, then tracks the token through login and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state tracking the session token and restore status.
///
/// Provided as an `RwSignal<AuthState>` context from the root component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the browser session store has been read.
    pub fn restoring() -> Self {
        Self { token: None, loading: true }
    }

    /// State after the session store has been read.
    pub fn restored(token: Option<String>) -> Self {
        Self { token, loading: false }
    }

    /// Presence of a token is the only authentication check.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, token: String) {
        self.token = Some(token);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.token = None;
        self.loading = false;
    }
}
