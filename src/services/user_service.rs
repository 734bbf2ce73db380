use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::validation::required_text;
use crate::models::{CreateUser, NewUser, User};
use crate::store::SharedStore;

#[derive(Clone)]
pub struct UserService {
    store: SharedStore,
}

impl UserService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn create_user(&self, user_data: CreateUser) -> Result<User, ApiError> {
        let username = required_text(user_data.username, "username")?;
        let user = self.store.insert_user(NewUser { username }).await?;

        tracing::info!(user_id = %user.id, "Created user");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.store.list_users().await?)
    }

    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self.store.find_user(user_id).await?)
    }

    /// Resolves a raw path identifier to a stored user. An identifier that
    /// does not parse cannot name a stored user and is reported as a miss.
    pub async fn require_user(&self, user_id: &str) -> Result<User, ApiError> {
        let id = Uuid::parse_str(user_id.trim()).map_err(|_| ApiError::UserNotFound)?;

        self.get_user_by_id(id).await?.ok_or(ApiError::UserNotFound)
    }
}
