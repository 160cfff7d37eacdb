use super::*;

#[test]
fn normalize_value_trims_and_rejects_empty() {
    assert_eq!(normalize_value(""), None);
    assert_eq!(normalize_value("   "), None);
    assert_eq!(
        normalize_value("  https://api.example.test/ "),
        Some("https://api.example.test/".to_owned())
    );
}

#[test]
fn apply_overrides_keeps_default_without_runtime_value() {
    let mut config = ApiConfig { api_base_url: DEFAULT_API_BASE_URL.to_owned() };
    apply_overrides(&mut config, RuntimeConfig::default());
    assert_eq!(config.api_base_url, "/api");
}

#[test]
fn apply_overrides_replaces_base_url() {
    let mut config = ApiConfig { api_base_url: DEFAULT_API_BASE_URL.to_owned() };
    let runtime = RuntimeConfig { api_base_url: normalize_value("https://sightings.example.test/api") };
    apply_overrides(&mut config, runtime);
    assert_eq!(config.api_base_url, "https://sightings.example.test/api");
}

#[test]
fn load_without_browser_has_a_base_url() {
    assert!(!ApiConfig::load().api_base_url.is_empty());
}
