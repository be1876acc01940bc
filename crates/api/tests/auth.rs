//! Integration tests for login and password change.

mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_and_user(pool: PgPool) {
    seed_user(&pool, USERNAME, TEAM_NAME, ROLE).await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": USERNAME, "password": PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(json["expires_in"], 15 * 60);
    assert_eq!(json["user"]["user_id"], USERNAME);
    assert_eq!(json["user"]["team"], TEAM_NAME);
    assert!(json["user"].get("pwd").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_returns_401(pool: PgPool) {
    seed_user(&pool, USERNAME, TEAM_NAME, ROLE).await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": USERNAME, "password": "not-the-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_returns_401(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get_auth(app, "/api/v1/topics", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn change_password_then_login_with_new_one(pool: PgPool) {
    let token = seed_user(&pool, USERNAME, TEAM_NAME, ROLE).await;

    let app = build_test_app(pool.clone());
    let response = put_json_auth(
        app,
        "/api/v1/user/password",
        &token,
        json!({ "current_password": PASSWORD, "new_password": "a-much-better-one" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool.clone());
    let old = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": USERNAME, "password": PASSWORD }),
    )
    .await;
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);

    let app = build_test_app(pool);
    let new = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "username": USERNAME, "password": "a-much-better-one" }),
    )
    .await;
    assert_eq!(new.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn change_password_rejects_wrong_current_password(pool: PgPool) {
    let token = seed_user(&pool, USERNAME, TEAM_NAME, ROLE).await;

    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/user/password",
        &token,
        json!({ "current_password": "wrong", "new_password": "a-much-better-one" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn change_password_rejects_short_password(pool: PgPool) {
    let token = seed_user(&pool, USERNAME, TEAM_NAME, ROLE).await;

    let app = build_test_app(pool);
    let response = put_json_auth(
        app,
        "/api/v1/user/password",
        &token,
        json!({ "current_password": PASSWORD, "new_password": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
