//! Route guards keyed on session-token presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` keeps signed-out users on `/login`; `RedirectIfAuthenticated`
//! keeps signed-in users off the auth pages. Presence of a token is the only
//! check: expiry and signature are the API's business. These are UX guards,
//! not access control.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::paths;
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Requires a session token.
    Protected,
    /// Requires the absence of a session token.
    GuestOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session store not read yet; render nothing and wait.
    Pending,
    Render,
    Redirect(&'static str),
}

/// Decide what a guard does for the current auth state.
pub fn decide(guard: Guard, auth: &AuthState) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Pending;
    }
    match (guard, auth.is_authenticated()) {
        (Guard::Protected, false) => GuardDecision::Redirect(paths::LOGIN),
        (Guard::GuestOnly, true) => GuardDecision::Redirect(paths::SIGHTINGS),
        _ => GuardDecision::Render,
    }
}

fn guarded(guard: Guard, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| decide(guard, &auth.get()));

    Effect::new(move || {
        if let GuardDecision::Redirect(to) = decision.get() {
            navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render>
            {children()}
        </Show>
    }
}

/// Render `children` only with a session token; otherwise go to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Guard::Protected, children)
}

/// Render `children` only without a session token; otherwise go to the list.
#[component]
pub fn RedirectIfAuthenticated(children: ChildrenFn) -> impl IntoView {
    guarded(Guard::GuestOnly, children)
}
