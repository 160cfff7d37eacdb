//! API endpoint configuration.
//!
//! The base URL comes from the build-time `SIGHTINGS_API_BASE_URL` variable
//! and can be overridden at runtime through `window.SIGHTINGS_CONFIG`, so a
//! static deployment can point at another API without rebuilding. Values
//! here are public; never put secrets in them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when nothing is configured at build time.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Frontend configuration for the sightings API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base_url: String,
}

impl ApiConfig {
    /// Load build-time config and apply runtime overrides.
    pub fn load() -> Self {
        let mut config = Self {
            api_base_url: option_env!("SIGHTINGS_API_BASE_URL")
                .and_then(normalize_value)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned()),
        };
        apply_overrides(&mut config, runtime_config());
        config
    }
}

#[derive(Debug, Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
}

fn apply_overrides(config: &mut ApiConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
}

#[cfg(feature = "hydrate")]
fn runtime_config() -> RuntimeConfig {
    use wasm_bindgen::JsValue;

    let Some(window) = web_sys::window() else {
        return RuntimeConfig::default();
    };
    let Ok(object) = js_sys::Reflect::get(&window, &JsValue::from_str("SIGHTINGS_CONFIG")) else {
        return RuntimeConfig::default();
    };
    if object.is_null() || object.is_undefined() {
        return RuntimeConfig::default();
    }
    let api_base_url = js_sys::Reflect::get(&object, &JsValue::from_str("api_base_url"))
        .ok()
        .and_then(|v| v.as_string())
        .and_then(|v| normalize_value(&v));
    RuntimeConfig { api_base_url }
}

#[cfg(not(feature = "hydrate"))]
fn runtime_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
