use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::validation::lenient_string;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
}

/// Body of `POST /api/users`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    #[serde(default, deserialize_with = "lenient_string")]
    pub username: Option<String>,
}

/// Validated input for inserting a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
}
