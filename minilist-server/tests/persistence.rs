//! End-to-end save/load tests against a real database.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p minilist-server -- --ignored
//!
//! User ids are derived from the clock so repeated runs do not collide.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use minilist_server::db::{migrations, pool::create_pool};
use minilist_server::{build_router, AppState, ServerConfig};

async fn db_app() -> Router {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = create_pool(&url).expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations");
    build_router(AppState::new(pool, ServerConfig::default()))
}

fn fresh_user_id() -> i64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    (nanos % 1_000_000_000_000) as i64
}

fn init_data(id: i64) -> String {
    let profile = json!({"id": id, "first_name": "Ada", "username": "ada"}).to_string();
    serde_urlencoded::to_string([("user", profile.as_str())]).expect("encode initData")
}

async fn save(app: &Router, token: &str, tasks: Value, notes: Value) -> Response {
    let payload = json!({"initData": token, "tasks": tasks, "notes": notes});
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/save")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn load(app: &Router, token: &str) -> Value {
    let query = serde_urlencoded::to_string([("initData", token)]).expect("encode query");
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/load?{}", query))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn save_then_load_round_trip() {
    let app = db_app().await;
    let token = init_data(fresh_user_id());

    let response = save(
        &app,
        &token,
        json!([{"text": "buy milk", "completed": false}]),
        json!([]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["debug"]["savedTasks"], 1);

    let loaded = load(&app, &token).await;
    assert_eq!(loaded["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(loaded["tasks"][0]["text"], "buy milk");
    assert_eq!(loaded["tasks"][0]["completed"], false);
    assert_eq!(loaded["notes"], json!([]));
    assert_eq!(loaded["debug"]["mode"], "success");
}

#[tokio::test]
#[ignore = "requires database"]
async fn replace_semantics_not_merge() {
    let app = db_app().await;
    let token = init_data(fresh_user_id());

    save(
        &app,
        &token,
        json!([{"text": "one"}, {"text": "two"}]),
        json!([{"text": "remember"}]),
    )
    .await;

    // Empty tasks array clears tasks; the note list is replaced too
    save(&app, &token, json!([]), json!([{"text": "only this"}])).await;

    let loaded = load(&app, &token).await;
    assert_eq!(loaded["tasks"], json!([]));
    assert_eq!(loaded["notes"].as_array().unwrap().len(), 1);
    assert_eq!(loaded["notes"][0]["text"], "only this");
}

#[tokio::test]
#[ignore = "requires database"]
async fn load_orders_most_recent_first() {
    let app = db_app().await;
    let token = init_data(fresh_user_id());

    save(
        &app,
        &token,
        json!([
            {"text": "older", "createdAt": "2024-01-01T00:00:00Z"},
            {"text": "newer", "createdAt": "2024-06-01T00:00:00Z"}
        ]),
        json!([]),
    )
    .await;

    let loaded = load(&app, &token).await;
    assert_eq!(loaded["tasks"][0]["text"], "newer");
    assert_eq!(loaded["tasks"][1]["text"], "older");
}

#[tokio::test]
#[ignore = "requires database"]
async fn long_texts_are_clipped_on_save() {
    let app = db_app().await;
    let token = init_data(fresh_user_id());

    save(
        &app,
        &token,
        json!([{"text": "x".repeat(600)}]),
        json!([{"text": "y".repeat(1100)}]),
    )
    .await;

    let loaded = load(&app, &token).await;
    assert_eq!(loaded["tasks"][0]["text"].as_str().unwrap().len(), 500);
    assert_eq!(loaded["notes"][0]["text"].as_str().unwrap().len(), 1000);
}

#[tokio::test]
#[ignore = "requires database"]
async fn load_returns_only_own_rows() {
    let app = db_app().await;
    let token_a = init_data(fresh_user_id());
    let token_b = init_data(fresh_user_id() + 1);

    save(&app, &token_a, json!([{"text": "mine"}]), json!([])).await;
    save(&app, &token_b, json!([{"text": "theirs"}]), json!([])).await;

    let loaded = load(&app, &token_a).await;
    let texts: Vec<&str> = loaded["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["mine"]);
}
