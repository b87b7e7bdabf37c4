//! Integration tests for the HTTP client functionality.
//!
//! These tests verify the client configuration, request building,
//! response parsing, and error handling behavior.

use rest_crud::clients::{HttpClient, HttpMethod, HttpRequest};
use rest_crud::{BaseUrl, ClientConfig, HttpError, InvalidHttpRequestError};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(uri: &str) -> HttpClient {
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(uri).unwrap())
        .user_agent_prefix("CatApp/1.0")
        .default_header("X-Tenant", "acme")
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_client_configuration_from_config() {
    let client = client_for("https://api.example.com/v1");

    assert_eq!(
        client.base_url().map(AsRef::as_ref),
        Some("https://api.example.com/v1")
    );
    assert_eq!(
        client.default_headers().get("Accept").map(String::as_str),
        Some("application/json")
    );
    assert_eq!(
        client.default_headers().get("X-Tenant").map(String::as_str),
        Some("acme")
    );
    assert!(client.default_headers()["User-Agent"].starts_with("CatApp/1.0 | rest-crud v"));
    assert_eq!(
        client.resolve_url("cats/7"),
        "https://api.example.com/v1/cats/7"
    );
}

#[test]
fn test_invalid_request_produces_correct_error() {
    let result = HttpRequest::builder(HttpMethod::Post, "/cats").build();

    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::MissingBody { .. })
    ));
}

// ============================================================================
// Round Trips
// ============================================================================

#[tokio::test]
async fn test_request_sends_default_headers_and_decodes_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cats"))
        .and(header("accept", "application/json"))
        .and(header("x-tenant", "acme"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-request-id", "abc-123")
                .set_body_json(json!([{"id": 1}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "/cats")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert!(response.is_ok());
    assert_eq!(response.body, json!([{"id": 1}]));
    assert_eq!(response.request_id(), Some("abc-123"));
}

#[tokio::test]
async fn test_request_with_body_sets_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/cats/1"))
        .and(header("content-type", "application/json"))
        .and(header("x-trace", "on"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Patch, "/cats/1")
        .body(json!({"name": "Tom"}))
        .header("X-Trace", "on")
        .header("content-type", "text/plain")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(response.body, json!({"id": 1}));
}

#[tokio::test]
async fn test_deprecation_header_is_exposed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/legacy"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Sunset", "Sat, 01 Jan 2028 00:00:00 GMT")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "/legacy")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();

    assert_eq!(
        response.deprecation_notice(),
        Some("Sat, 01 Jan 2028 00:00:00 GMT")
    );
}

// ============================================================================
// Errors
// ============================================================================

#[tokio::test]
async fn test_error_status_uses_plain_text_body_as_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/cats/1"))
        .respond_with(ResponseTemplate::new(409).set_body_string("cat is busy"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Delete, "/cats/1")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 409);
            assert_eq!(e.message, "cat is busy");
            assert!(e.error_reference.is_none());
        }
        other => panic!("expected a response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "/cats")
        .build()
        .unwrap();

    let error = client.request(request).await.unwrap_err();

    match error {
        HttpError::Decode(e) => assert_eq!(e.url, format!("{}/cats", server.uri())),
        other => panic!("expected a decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_relative_path_without_base_url_is_network_error() {
    let client = HttpClient::new(&ClientConfig::default()).unwrap();
    let request = HttpRequest::builder(HttpMethod::Get, "/cats")
        .build()
        .unwrap();

    assert!(matches!(
        client.request(request).await,
        Err(HttpError::Network(_))
    ));
}
