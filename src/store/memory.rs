use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ExerciseStore, StoreError};
use crate::models::{Exercise, ExerciseFilter, NewExercise, NewUser, User};

/// Process-local store keeping records in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    users: Arc<RwLock<Vec<User>>>,
    exercises: Arc<RwLock<Vec<Exercise>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn exercise_count(&self) -> usize {
        self.exercises.read().await.len()
    }
}

#[async_trait]
impl ExerciseStore for InMemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
        };
        self.users.write().await.push(user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn insert_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError> {
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: exercise.user_id,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
        };
        self.exercises.write().await.push(exercise.clone());
        Ok(exercise)
    }

    async fn find_exercises(
        &self,
        filter: &ExerciseFilter,
        limit: Option<usize>,
    ) -> Result<Vec<Exercise>, StoreError> {
        let exercises = self.exercises.read().await;

        Ok(exercises
            .iter()
            .filter(|e| filter.matches(e))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
