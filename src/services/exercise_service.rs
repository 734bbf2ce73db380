use chrono::{NaiveDate, Utc};

use crate::errors::ApiError;
use crate::models::validation::{display_date, non_blank, parse_date, parse_duration, parse_limit, required_text};
use crate::models::{
    CreateExercise, ExerciseFilter, ExerciseLog, ExerciseResponse, LogEntry, LogQuery, NewExercise,
};
use crate::services::UserService;
use crate::store::SharedStore;

#[derive(Clone)]
pub struct ExerciseService {
    store: SharedStore,
    users: UserService,
}

impl ExerciseService {
    pub fn new(store: SharedStore) -> Self {
        let users = UserService::new(store.clone());
        Self { store, users }
    }

    pub async fn add_exercise(
        &self,
        user_id: &str,
        exercise_data: CreateExercise,
    ) -> Result<ExerciseResponse, ApiError> {
        let description = required_text(exercise_data.description, "description")?;
        let duration = parse_duration(exercise_data.duration.as_deref())?;
        let date = match non_blank(exercise_data.date.as_deref()) {
            Some(raw) => parse_date(raw).ok_or(ApiError::InvalidDate)?,
            None => today(),
        };

        let user = self.users.require_user(user_id).await?;

        let exercise = self
            .store
            .insert_exercise(NewExercise {
                user_id: user.id,
                description,
                duration,
                date,
            })
            .await?;

        tracing::info!(user_id = %user.id, exercise_id = %exercise.id, "Logged exercise");

        // The exercise is already stored at this point; a user that vanished in
        // between still fails the request.
        let user = self.users.get_user_by_id(user.id).await?.ok_or_else(|| {
            tracing::warn!(user_id = %user.id, "User disappeared after exercise insert");
            ApiError::UserNotFound
        })?;

        Ok(ExerciseResponse::new(user, exercise))
    }

    pub async fn get_log(&self, user_id: &str, query: LogQuery) -> Result<ExerciseLog, ApiError> {
        let user = self.users.require_user(user_id).await?;

        let from = non_blank(query.from.as_deref())
            .map(|raw| parse_date(raw).ok_or(ApiError::InvalidFromDate))
            .transpose()?;
        let to = non_blank(query.to.as_deref())
            .map(|raw| parse_date(raw).ok_or(ApiError::InvalidToDate))
            .transpose()?;
        let limit = non_blank(query.limit.as_deref()).and_then(parse_limit);

        let filter = ExerciseFilter {
            user_id: user.id,
            from,
            to,
        };
        let exercises = self.store.find_exercises(&filter, limit).await?;

        tracing::debug!(user_id = %user.id, count = exercises.len(), "Fetched exercise log");

        Ok(ExerciseLog {
            id: user.id,
            username: user.username,
            from: from.map(display_date),
            to: to.map(display_date),
            count: exercises.len(),
            log: exercises.into_iter().map(LogEntry::from).collect(),
        })
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
