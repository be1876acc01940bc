//! User model.

use kafkamgt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `users` table. The password hash is never serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub user_id: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub pwd: String,
    pub team: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user. `password` is plaintext and hashed before insert.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 3, max = 64, message = "user_id must be 3-64 characters"))]
    pub user_id: String,
    #[validate(length(min = 1, max = 128, message = "full_name must be 1-128 characters"))]
    pub full_name: String,
    pub password: String,
    pub team: String,
    pub role: String,
}

/// Request body for `PUT /user/password`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePassword {
    pub current_password: String,
    pub new_password: String,
}
