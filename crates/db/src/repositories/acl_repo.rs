//! Repository for the `acls` source-of-truth table.

use kafkamgt_core::request_id::generate_request_id;
use sqlx::{PgConnection, PgPool};

use crate::models::acl::{Acl, CreateAcl};

/// Column list for acls queries.
const COLUMNS: &str = "id, req_no, topic_name, env, team_name, consumer_group, \
    topic_type, acl_ip, acl_ssl, created_at";

/// Provides access to the ACL source of truth.
pub struct AclRepo;

impl AclRepo {
    /// Insert ACLs, each under a freshly generated `req_no`.
    pub async fn insert_many(
        conn: &mut PgConnection,
        acls: &[CreateAcl],
    ) -> Result<Vec<Acl>, sqlx::Error> {
        let query = format!(
            "INSERT INTO acls
                (req_no, topic_name, env, team_name, consumer_group, topic_type, acl_ip, acl_ssl)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );

        let mut inserted = Vec::with_capacity(acls.len());
        for acl in acls {
            let row = sqlx::query_as::<_, Acl>(&query)
                .bind(generate_request_id())
                .bind(&acl.topic_name)
                .bind(&acl.env)
                .bind(&acl.team_name)
                .bind(&acl.consumer_group)
                .bind(acl.topic_type.as_str())
                .bind(&acl.acl_ip)
                .bind(&acl.acl_ssl)
                .fetch_one(&mut *conn)
                .await?;
            inserted.push(row);
        }
        Ok(inserted)
    }

    /// List ACLs ordered by topic, optionally restricted to one environment.
    pub async fn list(pool: &PgPool, env: Option<&str>) -> Result<Vec<Acl>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM acls
             WHERE ($1::TEXT IS NULL OR env = $1)
             ORDER BY topic_name ASC, id ASC"
        );
        sqlx::query_as::<_, Acl>(&query)
            .bind(env)
            .fetch_all(pool)
            .await
    }
}
