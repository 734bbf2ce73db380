#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use exercise_tracker::api::routes::create_routes;
use exercise_tracker::store::InMemoryStore;
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory store, plus a handle on that store.
pub fn test_app() -> (Router, InMemoryStore) {
    let store = InMemoryStore::new();
    let app = create_routes(Arc::new(store.clone()));
    (app, store)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is not UTF-8")
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        body: body.to_vec(),
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_form(app: &Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Creates a user through the API and returns its identifier.
pub async fn create_user(app: &Router, username: &str) -> String {
    let response = post_json(app, "/api/users", serde_json::json!({ "username": username })).await;
    assert_eq!(response.status, StatusCode::OK);
    response.json()["_id"].as_str().unwrap().to_string()
}

pub async fn add_exercise(app: &Router, user_id: &str, description: &str, duration: u32, date: &str) -> TestResponse {
    post_json(
        app,
        &format!("/api/users/{user_id}/exercises"),
        serde_json::json!({
            "description": description,
            "duration": duration,
            "date": date,
        }),
    )
    .await
}
