//! Repository for the `topics` source-of-truth table.

use sqlx::{PgConnection, PgPool};

use crate::models::topic::{CreateTopic, Topic};

/// Column list for topics queries.
const COLUMNS: &str = "id, topic_name, env, team_name, app_name, created_at";

/// Provides access to the topic source of truth.
pub struct TopicRepo;

impl TopicRepo {
    /// Insert topics, skipping any already recorded for the same environment.
    ///
    /// Returns only the rows that were newly inserted.
    pub async fn insert_many(
        conn: &mut PgConnection,
        topics: &[CreateTopic],
    ) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!(
            "INSERT INTO topics (topic_name, env, team_name, app_name)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (topic_name, env) DO NOTHING
             RETURNING {COLUMNS}"
        );

        let mut inserted = Vec::with_capacity(topics.len());
        for topic in topics {
            let row = sqlx::query_as::<_, Topic>(&query)
                .bind(&topic.topic_name)
                .bind(&topic.env)
                .bind(&topic.team_name)
                .bind(&topic.app_name)
                .fetch_optional(&mut *conn)
                .await?;
            inserted.extend(row);
        }
        Ok(inserted)
    }

    /// Find a topic in the given environment.
    pub async fn find(
        pool: &PgPool,
        topic_name: &str,
        env: &str,
    ) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE topic_name = $1 AND env = $2");
        sqlx::query_as::<_, Topic>(&query)
            .bind(topic_name)
            .bind(env)
            .fetch_optional(pool)
            .await
    }

    /// List topics ordered by name, optionally restricted to one environment.
    pub async fn list(pool: &PgPool, env: Option<&str>) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topics
             WHERE ($1::TEXT IS NULL OR env = $1)
             ORDER BY topic_name ASC, env ASC"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(env)
            .fetch_all(pool)
            .await
    }
}
