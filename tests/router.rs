mod common;

use axum::http::Method;
use serde_json::json;

#[tokio::test]
async fn test_cors_allows_client_origin() {
    let (server, _repository) = common::create_test_server();

    let response = server
        .post("/api/url/shorten")
        .add_header("origin", common::CLIENT_URL)
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    response.assert_header("access-control-allow-origin", common::CLIENT_URL);
    response.assert_header("access-control-allow-credentials", "true");
}

#[tokio::test]
async fn test_cors_ignores_other_origin() {
    let (server, _repository) = common::create_test_server();

    let response = server
        .post("/api/url/shorten")
        .add_header("origin", "https://evil.example.org")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;

    assert!(!response.contains_header("access-control-allow-origin"));
}

#[tokio::test]
async fn test_cors_preflight() {
    let (server, _repository) = common::create_test_server();

    let response = server
        .method(Method::OPTIONS, "/api/url/shorten")
        .add_header("origin", common::CLIENT_URL)
        .add_header("access-control-request-method", "POST")
        .add_header("access-control-request-headers", "content-type")
        .await;

    response.assert_status_ok();
    response.assert_header("access-control-allow-origin", common::CLIENT_URL);

    let methods = response.header("access-control-allow-methods");
    let methods = methods.to_str().unwrap();
    for method in ["GET", "POST", "PUT", "DELETE"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }
}

#[tokio::test]
async fn test_redirect_with_trailing_slash() {
    let (server, repository) = common::create_test_server();
    common::create_test_url(&repository, "slash123", "https://example.com/page").await;

    let response = server.get("/api/url/slash123/").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/page");
}

#[tokio::test]
async fn test_routes_outside_api_prefix_not_found() {
    let (server, repository) = common::create_test_server();
    common::create_test_url(&repository, "prefix12", "https://example.com").await;

    let response = server.get("/prefix12").await;
    response.assert_status_not_found();

    let response = server
        .post("/shorten")
        .json(&json!({ "originalUrl": "https://example.com" }))
        .await;
    response.assert_status_not_found();
}
