use super::*;

fn signed_in() -> AuthState {
    AuthState::restored(Some("a.b.c".to_owned()))
}

fn signed_out() -> AuthState {
    AuthState::restored(None)
}

// =============================================================
// ProtectedRoute
// =============================================================

#[test]
fn protected_redirects_signed_out_to_login() {
    assert_eq!(decide(Guard::Protected, &signed_out()), GuardDecision::Redirect("/login"));
}

#[test]
fn protected_renders_for_signed_in() {
    assert_eq!(decide(Guard::Protected, &signed_in()), GuardDecision::Render);
}

// =============================================================
// RedirectIfAuthenticated
// =============================================================

#[test]
fn guest_only_redirects_signed_in_to_list() {
    assert_eq!(
        decide(Guard::GuestOnly, &signed_in()),
        GuardDecision::Redirect("/AirlineSightings")
    );
}

#[test]
fn guest_only_renders_for_signed_out() {
    assert_eq!(decide(Guard::GuestOnly, &signed_out()), GuardDecision::Render);
}

// =============================================================
// Restore phase
// =============================================================

#[test]
fn both_guards_wait_while_restoring() {
    let state = AuthState::restoring();
    assert_eq!(decide(Guard::Protected, &state), GuardDecision::Pending);
    assert_eq!(decide(Guard::GuestOnly, &state), GuardDecision::Pending);
}

#[test]
fn any_token_passes_protected_without_validation() {
    let state = AuthState::restored(Some("not-even-a-jwt".to_owned()));
    assert_eq!(decide(Guard::Protected, &state), GuardDecision::Render);
}
