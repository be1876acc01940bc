//! Team model.

use kafkamgt_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub team_name: String,
    pub team_mail: Option<String>,
    pub app: Option<String>,
    pub team_phone: Option<String>,
    pub contact_person: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a team.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeam {
    #[validate(length(min = 1, max = 64, message = "team_name must be 1-64 characters"))]
    pub team_name: String,
    #[validate(email(message = "team_mail must be an email address"))]
    pub team_mail: Option<String>,
    pub app: Option<String>,
    pub team_phone: Option<String>,
    pub contact_person: Option<String>,
}
