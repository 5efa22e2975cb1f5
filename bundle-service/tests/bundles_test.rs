mod common;

use axum::http::StatusCode;
use bundle_service::models::Bundle;
use bundle_service::services::{MemoryStore, UnavailableReason, UnavailableStore};
use common::{app, get, post, test_config, unconfigured};
use mongodb::bson::doc;
use std::sync::Arc;

#[tokio::test]
async fn lists_seeded_bundles_in_insertion_order() {
    let app = app(test_config(), Arc::new(MemoryStore::new()));
    post(&app, "/seed").await;

    let (status, body) = get(&app, "/bundles").await;

    assert_eq!(status, StatusCode::OK);
    let bundles = body.as_array().unwrap();
    assert_eq!(bundles.len(), 3);

    let names: Vec<&str> = bundles
        .iter()
        .map(|b| b["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["Essentials Bundle", "Sport Selection", "Luxury Selection"]
    );

    for bundle in bundles {
        let expected = bundle["name"] == "Essentials Bundle";
        assert_eq!(bundle["highlight"], expected);
    }

    assert_eq!(bundles[0]["price"], 129.0);
    assert_eq!(bundles[1]["price"], 159.0);
    assert_eq!(bundles[2]["price"], 399.0);
    assert_eq!(bundles[2]["tagline"], "Elevated materials. Effortless detail.");
    assert_eq!(bundles[1]["image"], "/images/sport.jpg");
}

#[tokio::test]
async fn listing_never_includes_items() {
    let app = app(test_config(), Arc::new(MemoryStore::new()));
    post(&app, "/seed").await;

    let (_, body) = get(&app, "/bundles").await;

    for bundle in body.as_array().unwrap() {
        let fields = bundle.as_object().unwrap();
        assert!(!fields.contains_key("items"));
        assert!(!fields.contains_key("_id"));
        assert_eq!(fields.len(), 6);
    }
}

#[tokio::test]
async fn sparse_records_are_filled_with_defaults() {
    let store = MemoryStore::with_documents(
        Bundle::COLLECTION,
        vec![doc! { "name": "Legacy", "items": [{ "product_title": "Tee" }] }],
    );
    let app = app(test_config(), Arc::new(store));

    let (status, body) = get(&app, "/bundles").await;

    assert_eq!(status, StatusCode::OK);
    let bundle = &body[0];
    assert_eq!(bundle["name"], "Legacy");
    assert!(bundle["tagline"].is_null());
    assert!(bundle["description"].is_null());
    assert!(bundle["image"].is_null());
    assert_eq!(bundle["price"], 0.0);
    assert_eq!(bundle["highlight"], false);
}

#[tokio::test]
async fn non_numeric_price_fails_the_request() {
    let store = MemoryStore::with_documents(
        Bundle::COLLECTION,
        vec![
            doc! { "name": "Fine", "price": 10.0 },
            doc! { "name": "Broken", "price": "call us" },
        ],
    );
    let app = app(test_config(), Arc::new(store));

    let (status, body) = get(&app, "/bundles").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn nan_price_fails_the_request() {
    let store = MemoryStore::with_documents(
        Bundle::COLLECTION,
        vec![doc! { "name": "Odd", "price": f64::NAN }],
    );
    let app = app(test_config(), Arc::new(store));

    let (status, body) = get(&app, "/bundles").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}

#[tokio::test]
async fn empty_list_without_a_database() {
    let app = app(
        unconfigured(),
        Arc::new(UnavailableStore::new(UnavailableReason::NotConfigured)),
    );

    let (status, body) = get(&app, "/bundles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}
