//! Integration tests for the resource client.
//!
//! These tests stand up a wiremock server and verify the full request
//! lifecycle: path resolution, HTTP method selection, body encoding,
//! response decoding, and error classification.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rest_model::{
    ApiError, AuthHeaders, BaseUrl, BodyFormat, ClientConfig, HttpError, Operation, Resource,
    ResourceClient,
};

// ============================================================================
// Test Resources
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Article {
    id: u64,
    title: String,
}

impl Resource for Article {
    const NAME: &'static str = "article";
    const PATH: &'static str = "/articles/{id}";
    const PATH_VARIABLES: &'static [&'static str] = &["id"];
    const OPERATIONS: &'static [Operation] = &[Operation::Get, Operation::Delete];

    fn path_value(&self, variable: &str) -> Option<String> {
        (variable == "id").then(|| self.id.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Draft {
    slug: String,
    body: String,
}

impl Resource for Draft {
    const NAME: &'static str = "draft";
    const PATH: &'static str = "/drafts/{slug}";
    const PATH_VARIABLES: &'static [&'static str] = &["slug"];
    const OPERATIONS: &'static [Operation] = &[Operation::Put];

    fn path_value(&self, variable: &str) -> Option<String> {
        (variable == "slug").then(|| self.slug.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct FormDraft {
    slug: String,
    body: String,
}

impl Resource for FormDraft {
    const NAME: &'static str = "form_draft";
    const PATH: &'static str = "/drafts/{slug}";
    const PATH_VARIABLES: &'static [&'static str] = &["slug"];
    const OPERATIONS: &'static [Operation] = &[Operation::Put];
    const SEND_AS: BodyFormat = BodyFormat::Multipart;

    fn path_value(&self, variable: &str) -> Option<String> {
        (variable == "slug").then(|| self.slug.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct SearchResult {
    id: u64,
    title: String,
}

impl Resource for SearchResult {
    const NAME: &'static str = "search_result";
    const PATH: &'static str = "/search";
    const OPERATIONS: &'static [Operation] = &[Operation::GetOverPost];
}

// ============================================================================
// Helpers
// ============================================================================

fn config_for(uri: &str) -> ClientConfig {
    ClientConfig::builder()
        .base_url(BaseUrl::new(uri).unwrap())
        .build()
        .unwrap()
}

fn unreachable_config() -> ClientConfig {
    // Port 1 is never listening; connections are refused immediately.
    config_for("http://127.0.0.1:1")
}

fn id_params(id: &str) -> HashMap<String, String> {
    HashMap::from([("id".to_string(), id.to_string())])
}

// ============================================================================
// Get
// ============================================================================

#[tokio::test]
async fn test_get_resolves_path_and_decodes_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": 5, "title": "Hello" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ResourceClient::<Article>::new(&config_for(&server.uri())).unwrap();
    let article = client.get(id_params("5")).await.unwrap();

    assert_eq!(
        article,
        Article {
            id: 5,
            title: "Hello".to_string()
        }
    );
}

#[tokio::test]
async fn test_get_forwards_residual_params_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/5"))
        .and(query_param("expand", "comments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5, "title": "x" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ResourceClient::<Article>::new(&config_for(&server.uri())).unwrap();
    let mut params = id_params("5");
    params.insert("expand".to_string(), "comments".to_string());

    client.get(params).await.unwrap();
}

#[tokio::test]
async fn test_get_over_post_sends_params_as_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_json(json!({ "q": "rust" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 1, "title": "x" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ResourceClient::<SearchResult>::new(&config_for(&server.uri())).unwrap();
    let result = client
        .get(HashMap::from([("q".to_string(), "rust".to_string())]))
        .await
        .unwrap();

    assert_eq!(result.id, 1);
}

#[tokio::test]
async fn test_get_404_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/9"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "error": "gone" })))
        .mount(&server)
        .await;

    let client = ResourceClient::<Article>::new(&config_for(&server.uri())).unwrap();
    let err = client.get(id_params("9")).await.unwrap_err();

    assert!(matches!(err, ApiError::NotFound { resource: "article" }));
}

#[tokio::test]
async fn test_get_other_error_statuses_carry_code_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/5"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "error": "maintenance" })))
        .mount(&server)
        .await;

    let client = ResourceClient::<Article>::new(&config_for(&server.uri())).unwrap();
    let err = client.get(id_params("5")).await.unwrap_err();

    match err {
        ApiError::Api { code, body } => {
            assert_eq!(code, 503);
            assert!(body.contains("maintenance"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_path_variable_makes_no_request() {
    let server = MockServer::start().await;

    // Any request reaching the server fails the test.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = ResourceClient::<Article>::new(&config_for(&server.uri())).unwrap();
    let err = client.get(HashMap::new()).await.unwrap_err();

    assert!(matches!(
        err,
        ApiError::MissingPathVariable {
            resource: "article",
            variable: "id",
        }
    ));
}

#[tokio::test]
async fn test_get_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = ResourceClient::<Article>::new(&config_for(&server.uri())).unwrap();
    let err = client.get(id_params("5")).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { resource: "article", .. }));
}

// ============================================================================
// Put
// ============================================================================

#[tokio::test]
async fn test_put_travels_over_post_with_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drafts/hello-world"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({ "slug": "hello-world", "body": "text" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ResourceClient::<Draft>::new(&config_for(&server.uri())).unwrap();
    let draft = Draft {
        slug: "hello-world".to_string(),
        body: "text".to_string(),
    };

    client.put(&draft, HashMap::new()).await.unwrap();
}

#[tokio::test]
async fn test_put_returning_decodes_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drafts/hello-world"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "slug": "hello-world", "body": "text" })),
        )
        .mount(&server)
        .await;

    let client = ResourceClient::<Draft>::new(&config_for(&server.uri())).unwrap();
    let draft = Draft {
        slug: "hello-world".to_string(),
        body: "text".to_string(),
    };

    let saved: Draft = client.put_returning(&draft, HashMap::new()).await.unwrap();
    assert_eq!(saved, draft);
}

#[tokio::test]
async fn test_put_multipart_encodes_fields_as_form_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drafts/hello-world"))
        .and(body_string_contains("name=\"slug\""))
        .and(body_string_contains("name=\"body\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ResourceClient::<FormDraft>::new(&config_for(&server.uri())).unwrap();
    let draft = FormDraft {
        slug: "hello-world".to_string(),
        body: "text".to_string(),
    };

    client.put(&draft, HashMap::new()).await.unwrap();
}

#[tokio::test]
async fn test_put_uses_instance_fields_for_path_variables() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/drafts/from-instance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ResourceClient::<Draft>::new(&config_for(&server.uri())).unwrap();
    let draft = Draft {
        slug: "from-instance".to_string(),
        body: "text".to_string(),
    };

    // No slug in params; the instance provides it.
    client.put(&draft, HashMap::new()).await.unwrap();
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_issues_delete_request() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/articles/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = ResourceClient::<Article>::new(&config_for(&server.uri())).unwrap();
    let article = Article {
        id: 5,
        title: "x".to_string(),
    };

    client.delete(&article, HashMap::new()).await.unwrap();
}

#[tokio::test]
async fn test_delete_404_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/articles/5"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ResourceClient::<Article>::new(&config_for(&server.uri())).unwrap();
    let article = Article {
        id: 5,
        title: "x".to_string(),
    };

    let err = client.delete(&article, HashMap::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { resource: "article" }));
}

// ============================================================================
// Connection failures surface as errors, never sentinels
// ============================================================================

#[tokio::test]
async fn test_get_connection_failure_is_a_network_error() {
    let client = ResourceClient::<Article>::new(&unreachable_config()).unwrap();

    let err = client.get(id_params("5")).await.unwrap_err();
    assert!(matches!(err, ApiError::Http(HttpError::Network(_))));
}

#[tokio::test]
async fn test_put_connection_failure_is_a_network_error() {
    let client = ResourceClient::<Draft>::new(&unreachable_config()).unwrap();
    let draft = Draft {
        slug: "hello".to_string(),
        body: "text".to_string(),
    };

    let err = client.put(&draft, HashMap::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Http(HttpError::Network(_))));
}

#[tokio::test]
async fn test_delete_connection_failure_is_a_network_error() {
    let client = ResourceClient::<Article>::new(&unreachable_config()).unwrap();
    let article = Article {
        id: 5,
        title: "x".to_string(),
    };

    let err = client.delete(&article, HashMap::new()).await.unwrap_err();
    assert!(matches!(err, ApiError::Http(HttpError::Network(_))));
}

// ============================================================================
// Authentication
// ============================================================================

struct TokenAuth;

impl AuthHeaders for TokenAuth {
    fn auth_headers(&self) -> HashMap<String, String> {
        HashMap::from([("Authorization".to_string(), "Bearer test-token".to_string())])
    }
}

#[tokio::test]
async fn test_auth_headers_are_sent_with_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/5"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 5, "title": "x" })))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::builder()
        .base_url(BaseUrl::new(server.uri()).unwrap())
        .auth(Arc::new(TokenAuth))
        .build()
        .unwrap();

    let client = ResourceClient::<Article>::new(&config).unwrap();
    client.get(id_params("5")).await.unwrap();
}

// ============================================================================
// Serde round trip
// ============================================================================

#[test]
fn test_resource_serde_round_trip() {
    let article = Article {
        id: 42,
        title: "Round trip".to_string(),
    };

    let value = serde_json::to_value(&article).unwrap();
    let back: Article = serde_json::from_value(value).unwrap();

    assert_eq!(article, back);
}
