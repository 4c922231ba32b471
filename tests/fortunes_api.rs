use std::collections::HashSet;
use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use fortune_service::repos::fortune::{FortuneRow, FortuneStore, MemoryFortuneStore};
use fortune_service::{AppState, build_router};
use serde_json::Value;
use tower::ServiceExt;

fn fortune(id: i64, text: &str) -> FortuneRow {
    FortuneRow {
        id,
        text: text.to_string(),
    }
}

fn sample_store() -> MemoryFortuneStore {
    MemoryFortuneStore::new(vec![
        fortune(1, "A journey of a thousand miles begins with a single step."),
        fortune(2, "Today is a good day to refactor."),
        fortune(3, "Beware of unwrap()."),
    ])
    .unwrap()
}

async fn get(store: MemoryFortuneStore, uri: &str) -> (StatusCode, Value) {
    let app = build_router(AppState::new(Arc::new(store)));
    let res = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn list_returns_every_stored_fortune() {
    let (status, body) = get(sample_store(), "/fortunes").await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().expect("array body");
    assert_eq!(items.len(), 3);

    let ids: HashSet<i64> = items.iter().map(|f| f["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, HashSet::from([1, 2, 3]));
    assert!(items.iter().any(|f| f["text"] == "Beware of unwrap()."));
}

#[tokio::test]
async fn random_returns_a_stored_fortune() {
    let (status, body) = get(sample_store(), "/random").await;

    assert_eq!(status, StatusCode::OK);
    let id = body["id"].as_i64().expect("numeric id");
    let text = body["text"].as_str().expect("string text");

    let stored = sample_store().list_all().await.unwrap();
    assert!(stored.contains(&fortune(id, text)));
}

#[tokio::test]
async fn random_eventually_covers_every_fortune() {
    let store = sample_store();
    let mut seen = HashSet::new();

    for _ in 0..300 {
        seen.insert(store.random_fortune().await.unwrap().id);
    }

    assert_eq!(seen, HashSet::from([1, 2, 3]));
}

#[tokio::test]
async fn random_on_empty_store_is_service_unavailable() {
    let (status, body) = get(MemoryFortuneStore::default(), "/random").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["code"], "STORE_EMPTY");
}

#[tokio::test]
async fn list_on_empty_store_is_an_empty_array() {
    let (status, body) = get(MemoryFortuneStore::default(), "/fortunes").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = get(MemoryFortuneStore::seeded(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = build_router(AppState::new(Arc::new(sample_store())));
    let res = app
        .oneshot(Request::builder().uri("/random").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert!(res.headers().contains_key("x-request-id"));
}
