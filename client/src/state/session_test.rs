use super::*;

#[test]
fn session_key_matches_stored_credential_name() {
    assert_eq!(SESSION_KEY, "user");
}

#[test]
fn normalize_token_rejects_blank() {
    assert_eq!(normalize_token(String::new()), None);
    assert_eq!(normalize_token("  \n".to_owned()), None);
}

#[test]
fn normalize_token_trims_whitespace() {
    assert_eq!(normalize_token(" a.b.c ".to_owned()), Some("a.b.c".to_owned()));
    assert_eq!(normalize_token("a.b.c".to_owned()), Some("a.b.c".to_owned()));
}

#[test]
fn load_token_is_none_without_browser() {
    store_token("a.b.c");
    assert_eq!(load_token(), None);
    clear_token();
}
