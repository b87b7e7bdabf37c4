//! Integration tests for `DirectCrud`, whose failures propagate as `Err`.

use rest_crud::{
    BaseUrl, ClientConfig, CrudError, DirectCrud, DirectCrudOptions, HttpClient, HttpError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Cat {
    id: u64,
    name: String,
}

fn client_for(uri: &str) -> HttpClient {
    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(uri).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn tom() -> Cat {
    Cat {
        id: 7,
        name: "Tom".to_string(),
    }
}

#[tokio::test]
async fn test_get_all_returns_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 7, "name": "Tom"}])))
        .expect(1)
        .mount(&server)
        .await;

    let cats =
        DirectCrud::<Cat>::new(client_for(&server.uri()), "/cats", DirectCrudOptions::new())
            .unwrap();

    assert_eq!(cats.get_all().await.unwrap(), vec![tom()]);
}

#[tokio::test]
async fn test_post_patch_put_send_json_with_configured_headers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cats"))
        .and(header("authorization", "Bearer t0ken"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"id": 7, "name": "Tom"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 7, "name": "Tom"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/cats/7"))
        .and(header("authorization", "Bearer t0ken"))
        .and(body_json(json!({"name": "Tom"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "Tom"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/cats/7"))
        .and(header("authorization", "Bearer t0ken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7, "name": "Tom"})))
        .expect(2)
        .mount(&server)
        .await;

    let options = DirectCrudOptions::new().header("Authorization", "Bearer t0ken");
    let cats = DirectCrud::<Cat>::new(client_for(&server.uri()), "/cats", options).unwrap();

    assert_eq!(cats.post(&tom()).await.unwrap(), tom());
    assert_eq!(cats.patch(7, &json!({"name": "Tom"})).await.unwrap(), tom());
    assert_eq!(cats.put(7, &tom()).await.unwrap(), tom());
    assert_eq!(cats.replace(7, &tom()).await.unwrap(), tom());
}

#[tokio::test]
async fn test_remove_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/cats/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": 7})))
        .expect(1)
        .mount(&server)
        .await;

    let cats =
        DirectCrud::<Cat>::new(client_for(&server.uri()), "/cats", DirectCrudOptions::new())
            .unwrap();

    assert_eq!(cats.remove(7).await.unwrap(), json!({"deleted": 7}));
}

#[tokio::test]
async fn test_not_found_propagates_as_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cats/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "no such cat"})))
        .mount(&server)
        .await;

    let cats =
        DirectCrud::<Cat>::new(client_for(&server.uri()), "/cats", DirectCrudOptions::new())
            .unwrap();

    match cats.get_single(99).await {
        Err(CrudError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.message, "no such cat");
        }
        other => panic!("expected a 404 response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_without_body_uses_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cats"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let cats =
        DirectCrud::<Cat>::new(client_for(&server.uri()), "/cats", DirectCrudOptions::new())
            .unwrap();

    let error = cats.get_all().await.unwrap_err();
    assert_eq!(error.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn test_body_is_deserialized_without_transform() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cats/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 7, "name": "Tom"}})),
        )
        .mount(&server)
        .await;

    let cats =
        DirectCrud::<Cat>::new(client_for(&server.uri()), "/cats", DirectCrudOptions::new())
            .unwrap();

    assert!(matches!(
        cats.get_single(7).await,
        Err(CrudError::Deserialize { .. })
    ));
}
