use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::validation::{display_date, lenient_string};
use super::User;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
}

/// Body of `POST /api/users/:id/exercises`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateExercise {
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
}

/// Validated input for inserting an exercise.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub description: String,
    pub duration: i32,
    pub date: NaiveDate,
}

/// Query string of `GET /api/users/:id/logs`.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Selection over a user's exercises. Both bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub user_id: Uuid,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl ExerciseFilter {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
        }
    }

    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.user_id == self.user_id
            && self.from.map_or(true, |from| exercise.date >= from)
            && self.to.map_or(true, |to| exercise.date <= to)
    }
}

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub date: String,
    pub duration: i32,
    pub description: String,
}

impl ExerciseResponse {
    pub fn new(user: User, exercise: Exercise) -> Self {
        Self {
            id: user.id,
            username: user.username,
            date: display_date(exercise.date),
            duration: exercise.duration,
            description: exercise.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i32,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: display_date(exercise.date),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExerciseLog {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_on(user_id: Uuid, date: NaiveDate) -> Exercise {
        Exercise {
            id: Uuid::new_v4(),
            user_id,
            description: "run".to_string(),
            duration: 30,
            date,
        }
    }

    #[test]
    fn filter_bounds_are_inclusive() {
        let user_id = Uuid::new_v4();
        let day = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let filter = ExerciseFilter {
            user_id,
            from: Some(day),
            to: Some(day),
        };

        assert!(filter.matches(&exercise_on(user_id, day)));
        assert!(!filter.matches(&exercise_on(user_id, day.succ_opt().unwrap())));
        assert!(!filter.matches(&exercise_on(user_id, day.pred_opt().unwrap())));
    }

    #[test]
    fn filter_ignores_other_users() {
        let day = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let filter = ExerciseFilter::for_user(Uuid::new_v4());

        assert!(!filter.matches(&exercise_on(Uuid::new_v4(), day)));
    }
}
