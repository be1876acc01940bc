#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use kafkamgt_api::app::build_router;
use kafkamgt_api::auth::jwt::{generate_access_token, JwtConfig};
use kafkamgt_api::auth::password::hash_password;
use kafkamgt_api::config::ServerConfig;
use kafkamgt_api::state::AppState;
use kafkamgt_db::models::env::CreateEnv;
use kafkamgt_db::models::team::CreateTeam;
use kafkamgt_db::models::topic::CreateTopic;
use kafkamgt_db::models::user::CreateUser;
use kafkamgt_db::repositories::{EnvRepo, TeamRepo, TopicRepo, UserRepo};

// ---------------------------------------------------------------------------
// Fixed test values
// ---------------------------------------------------------------------------

pub const ENV_NAME: &str = "ENV_NAME";
pub const TARGET_ENV_NAME: &str = "TARGET_ENV_NAME";
pub const USERNAME: &str = "USERNAME";
pub const PASSWORD: &str = "PASSWORD";
pub const ADMIN_USERNAME: &str = "ADMIN_USERNAME";
pub const TEAM_NAME: &str = "TEAM_NAME";
pub const TOPIC_NAME: &str = "TOPIC_NAME";
pub const CONSUMER_GROUP: &str = "CONSUMER_GROUP";
pub const ROLE: &str = "user";

const JWT_SECRET: &str = "integration-test-secret-long-enough";

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
        bootstrap_admin: None,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

pub async fn seed_env(pool: &PgPool, name: &str) -> i64 {
    EnvRepo::create(
        pool,
        &CreateEnv {
            name: name.to_string(),
            host: "localhost".to_string(),
            port: 9092,
            protocol: "PLAINTEXT".to_string(),
            env_type: "kafka".to_string(),
            keystore_location: None,
            truststore_location: None,
            keystore_pwd: None,
            key_pwd: None,
            truststore_pwd: None,
        },
    )
    .await
    .unwrap()
    .id
}

/// Create a user (and its team if missing) and return a bearer token for it.
pub async fn seed_user(pool: &PgPool, user_id: &str, team: &str, role: &str) -> String {
    if TeamRepo::find_by_name(pool, team).await.unwrap().is_none() {
        TeamRepo::create(
            pool,
            &CreateTeam {
                team_name: team.to_string(),
                team_mail: None,
                app: None,
                team_phone: None,
                contact_person: None,
            },
        )
        .await
        .unwrap();
    }

    let pwd_hash = hash_password(PASSWORD).unwrap();
    UserRepo::create(
        pool,
        &CreateUser {
            user_id: user_id.to_string(),
            full_name: format!("{user_id} full name"),
            password: String::new(),
            team: team.to_string(),
            role: role.to_string(),
        },
        &pwd_hash,
    )
    .await
    .unwrap();

    token_for(user_id, role)
}

/// Insert a topic straight into the source-of-truth table.
pub async fn seed_topic(pool: &PgPool, topic: &str, env: &str, team: &str) {
    let mut conn = pool.acquire().await.unwrap();
    TopicRepo::insert_many(
        &mut conn,
        &[CreateTopic {
            topic_name: topic.to_string(),
            env: env.to_string(),
            team_name: team.to_string(),
            app_name: Some("orders".to_string()),
        }],
    )
    .await
    .unwrap();
}

pub fn token_for(user_id: &str, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
