//! Repository for the `teams` table.

use sqlx::PgPool;

use crate::models::team::{CreateTeam, Team};

/// Column list for teams queries.
const COLUMNS: &str = "id, team_name, team_mail, app, team_phone, contact_person, created_at";

/// Provides CRUD operations for teams.
pub struct TeamRepo;

impl TeamRepo {
    /// Insert a new team, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTeam) -> Result<Team, sqlx::Error> {
        let query = format!(
            "INSERT INTO teams (team_name, team_mail, app, team_phone, contact_person)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(&input.team_name)
            .bind(&input.team_mail)
            .bind(&input.app)
            .bind(&input.team_phone)
            .bind(&input.contact_person)
            .fetch_one(pool)
            .await
    }

    /// Find a team by name.
    pub async fn find_by_name(pool: &PgPool, team_name: &str) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE team_name = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(team_name)
            .fetch_optional(pool)
            .await
    }

    /// List all teams ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams ORDER BY team_name ASC");
        sqlx::query_as::<_, Team>(&query).fetch_all(pool).await
    }
}
