use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{ExerciseStore, StoreError};
use crate::models::{Exercise, ExerciseFilter, NewExercise, NewUser, User};

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ExerciseStore for PgStore {
    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username)
            VALUES ($1, $2)
            RETURNING id, username
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.username)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>("SELECT id, username FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>("SELECT id, username FROM users ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn insert_exercise(&self, exercise: NewExercise) -> Result<Exercise, StoreError> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (id, user_id, description, duration, date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, description, duration, date
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(exercise.user_id)
        .bind(exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date)
        .fetch_one(&self.pool)
        .await?;

        Ok(exercise)
    }

    async fn find_exercises(
        &self,
        filter: &ExerciseFilter,
        limit: Option<usize>,
    ) -> Result<Vec<Exercise>, StoreError> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT id, user_id, description, duration, date FROM exercises WHERE user_id = ",
        );
        query.push_bind(filter.user_id);

        if let Some(from) = filter.from {
            query.push(" AND date >= ").push_bind(from);
        }
        if let Some(to) = filter.to {
            query.push(" AND date <= ").push_bind(to);
        }

        query.push(" ORDER BY created_at, id");

        if let Some(limit) = limit {
            query
                .push(" LIMIT ")
                .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let exercises = query
            .build_query_as::<Exercise>()
            .fetch_all(&self.pool)
            .await?;

        Ok(exercises)
    }
}
