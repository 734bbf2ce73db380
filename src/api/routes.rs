use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::health::{health_check, landing_page};
use super::users::{add_exercise, create_user, get_exercise_log, list_users};
use crate::services::{ExerciseService, UserService};
use crate::store::SharedStore;

/// Directory served for any path no route claims.
pub const PUBLIC_DIR: &str = "public";

#[derive(Clone)]
pub struct AppState {
    pub user_service: UserService,
    pub exercise_service: ExerciseService,
}

impl AppState {
    pub fn new(store: SharedStore) -> Self {
        Self {
            user_service: UserService::new(store.clone()),
            exercise_service: ExerciseService::new(store),
        }
    }
}

pub fn create_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health_check))
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/:id/exercises", post(add_exercise))
        .route("/api/users/:id/logs", get(get_exercise_log))
        .fallback_service(ServeDir::new(PUBLIC_DIR))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(store))
}
