//! REST API helpers for the external sightings service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! session token attached as a bearer credential.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Pages log failures and keep
//! rendering; nothing here retries or times out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, Sighting, SightingPayload};

/// Collection path for sighting records.
pub const SIGHTINGS_RESOURCE: &str = "AirlineSighting";

/// Path for the collection, or the search endpoint when `query` is non-empty.
pub fn list_endpoint(query: Option<&str>) -> String {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => format!("{SIGHTINGS_RESOURCE}/search?query={}", urlencoding::encode(q)),
        None => SIGHTINGS_RESOURCE.to_owned(),
    }
}

/// Path for a single sighting.
pub fn sighting_endpoint(id: i64) -> String {
    format!("{SIGHTINGS_RESOURCE}/{id}")
}

pub const LOGIN_ENDPOINT: &str = "Auth/login";
pub const REGISTER_ENDPOINT: &str = "Auth/register";

/// Join `path` onto `base_url` with exactly one `/` between them.
#[cfg(any(test, feature = "hydrate"))]
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim().trim_start_matches('/');
    if base.is_empty() { format!("/{path}") } else { format!("{base}/{path}") }
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the session token from a login response body.
///
/// Accepts `{"token": "..."}`, a JSON string, or the bare token text.
pub fn parse_token_response(body: &str) -> Option<String> {
    let body = body.trim();
    let token = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => map.get("token")?.as_str()?.to_owned(),
        Ok(serde_json::Value::String(token)) => token,
        Ok(_) => return None,
        Err(_) => body.to_owned(),
    };
    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        None
    } else {
        Some(token.to_owned())
    }
}

#[cfg(feature = "hydrate")]
mod http {
    use gloo_net::http::{RequestBuilder, Response};

    use super::{ApiError, bearer, build_url_with_base};
    use crate::state::session;
    use crate::util::config::ApiConfig;

    pub(super) fn url(path: &str) -> String {
        build_url_with_base(&ApiConfig::load().api_base_url, path)
    }

    /// Attach the stored session token, if any.
    pub(super) fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match session::load_token() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let resp = builder
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ok_or_error(resp).await
    }

    pub(super) async fn send_json<B: serde::Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ok_or_error(resp).await
    }

    async fn ok_or_error(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::http(status, &body))
    }
}

/// Fetch the collection, or search results when `query` is non-empty.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a sighting list.
pub async fn list_sightings(query: Option<String>) -> Result<Vec<Sighting>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = http::url(&list_endpoint(query.as_deref()));
        let resp = http::send(http::authorized(gloo_net::http::Request::get(&url))).await?;
        resp.json::<Vec<Sighting>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one sighting by id.
///
/// # Errors
///
/// Returns an error if the request fails or the body is not a sighting.
pub async fn fetch_sighting(id: i64) -> Result<Sighting, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = http::url(&sighting_endpoint(id));
        let resp = http::send(http::authorized(gloo_net::http::Request::get(&url))).await?;
        resp.json::<Sighting>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Create a sighting via `POST AirlineSighting`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn create_sighting(payload: &SightingPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = http::url(SIGHTINGS_RESOURCE);
        http::send_json(http::authorized(gloo_net::http::Request::post(&url)), payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::Unavailable)
    }
}

/// Replace a sighting via `PUT AirlineSighting/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn update_sighting(id: i64, payload: &SightingPayload) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = http::url(&sighting_endpoint(id));
        http::send_json(http::authorized(gloo_net::http::Request::put(&url)), payload).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err(ApiError::Unavailable)
    }
}

/// Delete a sighting via `DELETE AirlineSighting/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn delete_sighting(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = http::url(&sighting_endpoint(id));
        http::send(http::authorized(gloo_net::http::Request::delete(&url))).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for a session token via `POST Auth/login`.
///
/// # Errors
///
/// Returns an error if the request fails or the response carries no token.
pub async fn login(credentials: &Credentials) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = http::url(LOGIN_ENDPOINT);
        let resp = http::send_json(gloo_net::http::Request::post(&url), credentials).await?;
        let body = resp.text().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        parse_token_response(&body).ok_or_else(|| ApiError::Parse("login response carried no token".to_owned()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST Auth/register`.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects it.
pub async fn register(credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = http::url(REGISTER_ENDPOINT);
        http::send_json(gloo_net::http::Request::post(&url), credentials).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}
