use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use super::extract::FormOrJson;
use super::routes::AppState;
use crate::errors::ApiError;
use crate::models::{CreateExercise, CreateUser, ExerciseLog, ExerciseResponse, LogQuery, User};

/// Create a user
#[tracing::instrument(skip(state, request))]
pub async fn create_user(
    State(state): State<AppState>,
    FormOrJson(request): FormOrJson<CreateUser>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service.create_user(request).await?;
    Ok(Json(user))
}

/// List every user
#[tracing::instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Log an exercise for a user
#[tracing::instrument(skip(state, request))]
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    FormOrJson(request): FormOrJson<CreateExercise>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let exercise = state.exercise_service.add_exercise(&user_id, request).await?;
    Ok(Json(exercise))
}

/// A user's exercise log, optionally bounded by date and capped in size
#[tracing::instrument(skip(state))]
pub async fn get_exercise_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<LogQuery>,
) -> Result<Json<ExerciseLog>, ApiError> {
    let log = state.exercise_service.get_log(&user_id, query).await?;
    Ok(Json(log))
}
