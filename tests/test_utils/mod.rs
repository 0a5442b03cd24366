//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body, http::Request};
use serde_json::Value;

use chatbox::api::AppState;
use chatbox::api::app;
use chatbox::core::AppConfig;
use chatbox::core::db::{async_db, initialize_db};

pub const TEST_FRONTEND_URL: &str = "http://localhost:5173";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "openai/gpt-4o";

fn test_config(llm_api_hostname: &str) -> AppConfig {
    AppConfig {
        frontend_url: String::from(TEST_FRONTEND_URL),
        port: String::from("0"),
        db_path: String::from(":memory:"),
        llm_api_hostname: llm_api_hostname.to_string(),
        llm_api_key: String::from(TEST_API_KEY),
        llm_model: String::from(TEST_MODEL),
        llm_max_tokens: 100,
    }
}

/// Creates a test application router backed by a fresh in-memory
/// database. Completion requests go to `llm_api_hostname`, usually a
/// `mockito` server.
pub async fn test_app(llm_api_hostname: &str) -> Router {
    let db = async_db(":memory:")
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to migrate db");
        Ok(())
    })
    .await
    .unwrap();

    let app_state = AppState::new(db, test_config(llm_api_hostname));
    app(Arc::new(app_state))
}

/// Same as `test_app` but the schema is never created so every
/// query against the store fails.
pub async fn test_app_without_schema(llm_api_hostname: &str) -> Router {
    let db = async_db(":memory:")
        .await
        .expect("Failed to connect to async db");
    let app_state = AppState::new(db, test_config(llm_api_hostname));
    app(Arc::new(app_state))
}

/// Serve the test app on a random local port and return its base URL
pub async fn spawn_test_server(llm_api_hostname: &str) -> String {
    let app = test_app(llm_api_hostname).await;
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A provider response with `content` as the only choice
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": TEST_MODEL,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn delete_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("DELETE")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf-8")
}

pub async fn body_to_json(body: Body) -> Value {
    serde_json::from_str(&body_to_string(body).await).expect("Body is not json")
}
