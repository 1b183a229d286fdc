//! Integration tests for `RestClient`: construction, path handling and its
//! role as the transport behind resource bindings.

use std::collections::HashMap;

use serde_json::json;
use shopify_draft_orders::clients::rest::{RestClient, RestError};
use shopify_draft_orders::clients::{HttpError, HttpResponse, HttpResponseError};
use shopify_draft_orders::rest::RestTransport;
use shopify_draft_orders::{ApiVersion, HostUrl, Session, ShopDomain, ShopifyConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_session(shop: &str, access_token: &str) -> Session {
    Session::new(ShopDomain::new(shop).unwrap(), access_token)
}

async fn mock_client() -> (MockServer, RestClient) {
    let server = MockServer::start().await;
    let config = ShopifyConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&create_test_session("test-shop", "test-token"), Some(&config))
        .unwrap();
    (server, client)
}

// ============================================================================
// RestClient Construction Tests
// ============================================================================

#[test]
fn test_rest_client_creates_with_default_version() {
    let session = create_test_session("test-shop", "test-token");
    let client = RestClient::new(&session, None).unwrap();

    assert_eq!(client.api_version(), &ApiVersion::latest());
    assert_eq!(client.tries(), 1);
}

#[test]
fn test_rest_client_takes_tries_from_config() {
    let session = create_test_session("test-shop", "test-token");
    let config = ShopifyConfig::builder().tries(4).build().unwrap();

    let client = RestClient::new(&session, Some(&config)).unwrap();

    assert_eq!(client.tries(), 4);
}

#[test]
fn test_rest_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
}

// ============================================================================
// Paths
// ============================================================================

#[tokio::test]
async fn test_path_is_normalized_with_or_without_json_suffix() {
    let (server, client) = mock_client().await;
    Mock::given(method("GET"))
        .and(path("/admin/api/2025-10/draft_orders/count.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 2})))
        .expect(3)
        .mount(&server)
        .await;

    for p in ["draft_orders/count", "draft_orders/count.json", "/draft_orders/count.json"] {
        let response = client.get(p, None).await.unwrap();
        assert_eq!(response.body["count"], 2);
    }
}

#[tokio::test]
async fn test_empty_path_is_rejected() {
    let (_server, client) = mock_client().await;

    let result = client.get("", None).await;

    assert!(matches!(result, Err(RestError::InvalidPath { .. })));
}

// ============================================================================
// Transport seam
// ============================================================================

async fn post_through<T: RestTransport>(transport: &T) -> Result<HttpResponse, RestError> {
    transport
        .post(
            "draft_orders.json",
            json!({"draft_order": {"email": "bob.norman@mail.example.com"}}),
            Some(HashMap::new()),
        )
        .await
}

#[tokio::test]
async fn test_rest_client_implements_the_transport_seam() {
    let (server, client) = mock_client().await;
    Mock::given(method("POST"))
        .and(path("/admin/api/2025-10/draft_orders.json"))
        .and(body_json(json!({"draft_order": {"email": "bob.norman@mail.example.com"}})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"draft_order": {"id": 994_118_539}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = post_through(&client).await.unwrap();

    assert_eq!(response.code, 201);
    assert_eq!(response.body["draft_order"]["id"], 994_118_539);
}

#[tokio::test]
async fn test_non_2xx_is_an_http_response_error() {
    let (server, client) = mock_client().await;
    Mock::given(method("DELETE"))
        .respond_with(
            ResponseTemplate::new(403)
                .insert_header("X-Request-Id", "req-403")
                .set_body_json(json!({"errors": "Forbidden"})),
        )
        .mount(&server)
        .await;

    let error = client.delete("draft_orders/1", None).await.unwrap_err();

    assert_eq!(error.status(), Some(403));
    match error {
        RestError::Http(HttpError::Response(HttpResponseError {
            code,
            message,
            error_reference,
        })) => {
            assert_eq!(code, 403);
            assert!(message.contains("Forbidden"));
            assert_eq!(error_reference.as_deref(), Some("req-403"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Type Export Tests
// ============================================================================

#[test]
fn test_types_exported_at_crate_root() {
    let _: fn(shopify_draft_orders::RestClient) = |_| {};
    let _: fn(shopify_draft_orders::RestError) = |_| {};
    let _: fn(shopify_draft_orders::clients::RestClient) = |_| {};
}
