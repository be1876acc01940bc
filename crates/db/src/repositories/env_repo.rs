//! Repository for the `envs` table.

use sqlx::PgPool;

use crate::models::env::{CreateEnv, Env};

/// Column list for envs queries.
const COLUMNS: &str = "id, name, host, port, protocol, env_type, keystore_location, \
    truststore_location, keystore_pwd, key_pwd, truststore_pwd, created_at";

/// Provides CRUD operations for Kafka environments.
pub struct EnvRepo;

impl EnvRepo {
    /// Register a new environment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEnv) -> Result<Env, sqlx::Error> {
        let query = format!(
            "INSERT INTO envs
                (name, host, port, protocol, env_type, keystore_location,
                 truststore_location, keystore_pwd, key_pwd, truststore_pwd)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Env>(&query)
            .bind(&input.name)
            .bind(&input.host)
            .bind(input.port)
            .bind(&input.protocol)
            .bind(&input.env_type)
            .bind(&input.keystore_location)
            .bind(&input.truststore_location)
            .bind(&input.keystore_pwd)
            .bind(&input.key_pwd)
            .bind(&input.truststore_pwd)
            .fetch_one(pool)
            .await
    }

    /// Find an environment by name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Env>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM envs WHERE name = $1");
        sqlx::query_as::<_, Env>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all environments ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Env>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM envs ORDER BY name ASC");
        sqlx::query_as::<_, Env>(&query).fetch_all(pool).await
    }
}
