// Persistence collaborator: the operations handlers may issue against storage

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Exercise, ExerciseFilter, NewExercise, NewUser, User};

pub use memory::InMemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage for users and their exercises. Identifiers are assigned by the
/// implementation on insert; records are never updated or deleted.
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn insert_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError>;

    /// Exercises matching `filter`, in storage order, capped at `limit` when given.
    async fn find_exercises(
        &self,
        filter: &ExerciseFilter,
        limit: Option<usize>,
    ) -> Result<Vec<Exercise>, StoreError>;
}

pub type SharedStore = Arc<dyn ExerciseStore>;
