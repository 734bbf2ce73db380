use axum::response::{Html, Json};
use serde_json::{json, Value};

const LANDING_PAGE: &str = include_str!("../../views/index.html");

/// Liveness probe; does not touch the store.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "checked_at": chrono::Utc::now().to_rfc3339(),
    }))
}

pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}
