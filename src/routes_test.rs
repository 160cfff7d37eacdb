use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use super::*;

async fn send_get(path: &str) -> axum::response::Response {
    base_routes()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = send_get("/healthz").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn root_redirects_to_sightings_list() {
    let response = send_get("/").await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/AirlineSightings");
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let response = send_get("/nope").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
