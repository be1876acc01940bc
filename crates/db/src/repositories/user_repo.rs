//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, UserInfo};

/// Column list for users queries.
const COLUMNS: &str = "id, user_id, full_name, pwd, team, role, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a user. `pwd_hash` is the already-hashed password; the
    /// plaintext in `input` is ignored.
    pub async fn create(
        pool: &PgPool,
        input: &CreateUser,
        pwd_hash: &str,
    ) -> Result<UserInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (user_id, full_name, pwd, team, role)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserInfo>(&query)
            .bind(&input.user_id)
            .bind(&input.full_name)
            .bind(pwd_hash)
            .bind(&input.team)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by login name.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: &str,
    ) -> Result<Option<UserInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, UserInfo>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List all users ordered by login name.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY user_id ASC");
        sqlx::query_as::<_, UserInfo>(&query).fetch_all(pool).await
    }

    /// Replace a user's password hash. Returns `true` if the user exists.
    pub async fn update_password(
        pool: &PgPool,
        user_id: &str,
        pwd_hash: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET pwd = $1, updated_at = NOW() WHERE user_id = $2")
            .bind(pwd_hash)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
