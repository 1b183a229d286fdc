//! Integration tests for metafields and fulfillments nested under a draft
//! order.

use serde_json::json;
use shopify_draft_orders::rest::resources::{
    DraftOrders, Fulfillment, FulfillmentListOptions, FulfillmentStatus, Metafield,
    MetafieldListOptions, Metafields,
};
use shopify_draft_orders::{HostUrl, RestClient, Session, ShopDomain, ShopifyConfig};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "/admin/api/2025-10";

fn client_for(server: &MockServer) -> RestClient {
    let config = ShopifyConfig::builder()
        .host(HostUrl::new(server.uri()).unwrap())
        .build()
        .unwrap();
    let session = Session::new(ShopDomain::new("test-shop").unwrap(), "test-token");
    RestClient::new(&session, Some(&config)).unwrap()
}

// ============================================================================
// Metafields
// ============================================================================

#[tokio::test]
async fn test_metafield_crud_on_a_draft_order() {
    let server = MockServer::start().await;
    let metafield = json!({
        "id": 1_069_228_935,
        "namespace": "my_fields",
        "key": "sold",
        "value": 25,
        "type": "number_integer",
        "owner_id": 994_118_539,
        "owner_resource": "draft_order"
    });

    Mock::given(method("GET"))
        .and(path(format!("{BASE}/draft_orders/994118539/metafields.json")))
        .and(query_param("namespace", "my_fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metafields": [metafield]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/draft_orders/994118539/metafields/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/draft_orders/994118539/metafields/1069228935.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metafield": metafield})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{BASE}/draft_orders/994118539/metafields.json")))
        .and(body_json(json!({"metafield": {
            "namespace": "my_fields",
            "key": "sold",
            "value": 25,
            "type": "number_integer"
        }})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"metafield": metafield})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("{BASE}/draft_orders/994118539/metafields/1069228935.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let draft_orders = DraftOrders::new(&client);
    let id = 994_118_539;

    let options = MetafieldListOptions {
        namespace: Some("my_fields".to_string()),
        ..Default::default()
    };
    let listed = draft_orders.list_metafields(id, Some(&options)).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].value_type.as_deref(), Some("number_integer"));

    assert_eq!(draft_orders.count_metafields(id, None).await.unwrap(), 1);

    let fetched = draft_orders
        .get_metafield(id, 1_069_228_935, None)
        .await
        .unwrap();
    assert_eq!(fetched.owner_resource.as_deref(), Some("draft_order"));

    let created = draft_orders
        .create_metafield(
            id,
            &Metafield {
                namespace: Some("my_fields".to_string()),
                key: Some("sold".to_string()),
                value: Some(json!(25)),
                value_type: Some("number_integer".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, Some(1_069_228_935));

    draft_orders
        .delete_metafield(id, 1_069_228_935)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_metafield_uses_both_ids() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("{BASE}/draft_orders/994118539/metafields/1069228935.json")))
        .and(body_json(json!({"metafield": {"id": 1_069_228_935, "value": "north"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metafield": {
            "id": 1_069_228_935,
            "value": "north"
        }})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let updated = DraftOrders::new(&client)
        .update_metafield(
            994_118_539,
            &Metafield {
                id: Some(1_069_228_935),
                value: Some(json!("north")),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.value, Some(json!("north")));
}

#[tokio::test]
async fn test_metafields_binding_accepts_other_owners() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{BASE}/products/632910392/metafields/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 4})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let count = Metafields::new(&client, "products", 632_910_392)
        .count(None)
        .await
        .unwrap();

    assert_eq!(count, 4);
}

// ============================================================================
// Fulfillments
// ============================================================================

#[tokio::test]
async fn test_fulfillment_lifecycle_on_a_draft_order() {
    let server = MockServer::start().await;
    let base = format!("{BASE}/draft_orders/994118539/fulfillments");

    for (action, status) in [("complete", "success"), ("open", "open"), ("cancel", "cancelled")] {
        Mock::given(method("POST"))
            .and(path(format!("{base}/255858046/{action}.json")))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fulfillment": {
                "id": 255_858_046,
                "status": status
            }})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server);
    let draft_orders = DraftOrders::new(&client);

    let completed = draft_orders
        .complete_fulfillment(994_118_539, 255_858_046)
        .await
        .unwrap();
    let opened = draft_orders
        .transition_fulfillment(994_118_539, 255_858_046)
        .await
        .unwrap();
    let cancelled = draft_orders
        .cancel_fulfillment(994_118_539, 255_858_046)
        .await
        .unwrap();

    assert_eq!(completed.status, Some(FulfillmentStatus::Success));
    assert_eq!(opened.status, Some(FulfillmentStatus::Open));
    assert_eq!(cancelled.status, Some(FulfillmentStatus::Cancelled));
}

#[tokio::test]
async fn test_fulfillment_list_count_get_create_update() {
    let server = MockServer::start().await;
    let base = format!("{BASE}/draft_orders/994118539/fulfillments");
    let fulfillment = json!({
        "id": 255_858_046,
        "order_id": 450_789_469,
        "status": "success",
        "tracking_company": "UPS",
        "tracking_numbers": ["1Z2345"],
        "tracking_urls": ["https://www.ups.com/track?tracknum=1Z2345"]
    });

    Mock::given(method("GET"))
        .and(path(format!("{base}.json")))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fulfillments": [fulfillment]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{base}/count.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"count": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{base}/255858046.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fulfillment": fulfillment})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("{base}.json")))
        .and(body_json(json!({"fulfillment": {"location_id": 905_684_977}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"fulfillment": fulfillment})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(format!("{base}/255858046.json")))
        .and(body_json(json!({"fulfillment": {"id": 255_858_046, "tracking_number": "1Z9999"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fulfillment": fulfillment})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let draft_orders = DraftOrders::new(&client);
    let id = 994_118_539;

    let listed = draft_orders
        .list_fulfillments(
            id,
            Some(&FulfillmentListOptions {
                limit: Some(10),
                ..Default::default()
            }),
        )
        .await
        .unwrap();
    assert_eq!(listed[0].tracking_company.as_deref(), Some("UPS"));

    assert_eq!(draft_orders.count_fulfillments(id, None).await.unwrap(), 1);

    let fetched = draft_orders
        .get_fulfillment(id, 255_858_046, None)
        .await
        .unwrap();
    assert_eq!(fetched.tracking_numbers, Some(vec!["1Z2345".to_string()]));

    draft_orders
        .create_fulfillment(
            id,
            &Fulfillment {
                location_id: Some(905_684_977),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    draft_orders
        .update_fulfillment(
            id,
            &Fulfillment {
                id: Some(255_858_046),
                tracking_number: Some("1Z9999".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_fulfillment_errors_propagate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": ["Fulfillment is already cancelled"]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let error = DraftOrders::new(&client)
        .cancel_fulfillment(994_118_539, 255_858_046)
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(422));
    assert_eq!(
        error.validation_errors().unwrap()["base"],
        vec!["Fulfillment is already cancelled".to_string()]
    );
}
