//! Integration tests for the request repositories.
//!
//! Exercises submission, approval and decline against a real database:
//! - Activity-log rows written alongside each request
//! - Source-of-truth rows written on approval
//! - Approve/decline only touch pending requests

use kafkamgt_core::request_id::REQUEST_ID_LENGTH;
use kafkamgt_core::requests::{RequestStatus, TopicType};
use kafkamgt_db::models::acl::CreateAclRequest;
use kafkamgt_db::models::activity::ActivityLogQuery;
use kafkamgt_db::models::decision::RequestFilter;
use kafkamgt_db::models::schema::CreateSchemaRequest;
use kafkamgt_db::models::team::CreateTeam;
use kafkamgt_db::models::topic::CreateTopicRequest;
use kafkamgt_db::models::user::{CreateUser, UserInfo};
use kafkamgt_db::repositories::topic_request_repo;
use kafkamgt_db::repositories::{
    AclRepo, AclRequestRepo, ActivityLogRepo, SchemaKey, SchemaRequestRepo, TeamRepo, TopicRepo,
    TopicRequestRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, user_id: &str, team: &str) -> UserInfo {
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
    UserRepo::create(
        pool,
        &CreateUser {
            user_id: user_id.to_string(),
            full_name: format!("{user_id} full"),
            password: String::new(),
            team: team.to_string(),
            role: "user".to_string(),
        },
        "not-a-real-hash",
    )
    .await
    .unwrap()
}

fn topic_request(topic: &str, env: &str) -> CreateTopicRequest {
    CreateTopicRequest {
        topic_name: topic.to_string(),
        partitions: 3,
        replication_factor: 2,
        env: env.to_string(),
        app_name: Some("billing-app".to_string()),
        acl_ip: Some("10.0.0.1".to_string()),
        acl_ssl: None,
        remarks: None,
    }
}

fn acl_request(topic: &str, env: &str, owner: &str) -> CreateAclRequest {
    CreateAclRequest {
        topic_name: topic.to_string(),
        env: env.to_string(),
        team_name: owner.to_string(),
        app_name: None,
        topic_type: TopicType::Consumer,
        acl_ip: Some("10.0.0.9".to_string()),
        acl_ssl: None,
        consumer_group: Some("billing-readers".to_string()),
        remarks: None,
    }
}

// ---------------------------------------------------------------------------
// Topic requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_topic_request_create_writes_activity(pool: PgPool) {
    let user = seed_user(&pool, "alice", "payments").await;

    let request = TopicRequestRepo::create(&pool, &topic_request("orders", "DEV"), &user)
        .await
        .unwrap();

    assert_eq!(request.topic_status, "created");
    assert_eq!(request.team_name, "payments");
    assert_eq!(request.requestor, "alice");
    assert_eq!(request.topic_type, "Producer");
    assert!(request.approver.is_none());

    let log = ActivityLogRepo::query(&pool, &ActivityLogQuery::default()).await.unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].activity_name, "topicRequest");
    assert_eq!(log[0].activity_type, "new");
    assert_eq!(log[0].details, "orders");
    assert_eq!(log[0].team, "payments");
    assert_eq!(log[0].req_no.len(), REQUEST_ID_LENGTH);

    // Nothing reaches the source of truth before approval.
    assert!(TopicRepo::find(&pool, "orders", "DEV").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_topic_request_approve_records_topic_and_producer_acl(pool: PgPool) {
    let user = seed_user(&pool, "alice", "payments").await;
    TopicRequestRepo::create(&pool, &topic_request("orders", "DEV"), &user)
        .await
        .unwrap();

    let approved = TopicRequestRepo::approve(&pool, "orders", "DEV", "admin")
        .await
        .unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].topic_status, "approved");
    assert_eq!(approved[0].approver.as_deref(), Some("admin"));
    assert!(approved[0].exec_time.is_some());

    let topic = TopicRepo::find(&pool, "orders", "DEV").await.unwrap().unwrap();
    assert_eq!(topic.team_name, "payments");

    let acls = AclRepo::list(&pool, Some("DEV")).await.unwrap();
    assert_eq!(acls.len(), 1);
    assert_eq!(acls[0].topic_type, "Producer");
    assert_eq!(acls[0].acl_ip.as_deref(), Some("10.0.0.1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_topic_request_approve_twice_is_noop(pool: PgPool) {
    let user = seed_user(&pool, "alice", "payments").await;
    TopicRequestRepo::create(&pool, &topic_request("orders", "DEV"), &user)
        .await
        .unwrap();

    TopicRequestRepo::approve(&pool, "orders", "DEV", "admin").await.unwrap();
    let second = TopicRequestRepo::approve(&pool, "orders", "DEV", "admin")
        .await
        .unwrap();
    assert!(second.is_empty());
    assert_eq!(AclRepo::list(&pool, None).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_topic_request_approve_unknown_returns_empty(pool: PgPool) {
    let approved = TopicRequestRepo::approve(&pool, "missing", "DEV", "admin")
        .await
        .unwrap();
    assert!(approved.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_topic_request_decline(pool: PgPool) {
    let user = seed_user(&pool, "alice", "payments").await;
    TopicRequestRepo::create(&pool, &topic_request("orders", "DEV"), &user)
        .await
        .unwrap();

    let declined = TopicRequestRepo::decline(&pool, "orders", "DEV", "admin", "naming")
        .await
        .unwrap();
    assert_eq!(declined.len(), 1);
    assert_eq!(declined[0].topic_status, "declined");
    assert_eq!(declined[0].decline_reason.as_deref(), Some("naming"));
    assert!(TopicRepo::find(&pool, "orders", "DEV").await.unwrap().is_none());
    assert!(!TopicRequestRepo::has_pending(&pool, "orders", "DEV").await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_topic_request_list_filters(pool: PgPool) {
    let user = seed_user(&pool, "alice", "payments").await;
    TopicRequestRepo::create(&pool, &topic_request("orders", "DEV"), &user)
        .await
        .unwrap();
    TopicRequestRepo::create(&pool, &topic_request("payments", "TST"), &user)
        .await
        .unwrap();
    TopicRequestRepo::approve(&pool, "orders", "DEV", "admin").await.unwrap();

    let all = TopicRequestRepo::list(&pool, &RequestFilter::default()).await.unwrap();
    assert_eq!(all.len(), 2);

    let pending = TopicRequestRepo::list(
        &pool,
        &RequestFilter {
            status: Some(RequestStatus::Created),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].topic_name, "payments");

    let dev = TopicRequestRepo::list(
        &pool,
        &RequestFilter {
            env: Some("DEV".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(dev.len(), 1);
    assert_eq!(dev[0].topic_name, "orders");

    let latest = TopicRequestRepo::find_latest_approved(&pool, "orders", "DEV")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.partitions, 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_topic_request_list_by_team_search_and_page(pool: PgPool) {
    let alice = seed_user(&pool, "alice", "payments").await;
    let bob = seed_user(&pool, "bob", "analytics").await;
    for topic in ["orders-v1", "orders-v2", "refunds"] {
        TopicRequestRepo::create(&pool, &topic_request(topic, "DEV"), &alice)
            .await
            .unwrap();
    }
    TopicRequestRepo::create(&pool, &topic_request("clickstream", "DEV"), &bob)
        .await
        .unwrap();

    let payments = TopicRequestRepo::list(
        &pool,
        &RequestFilter {
            team: Some("payments".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(payments.len(), 3);
    assert!(payments.iter().all(|r| r.team_name == "payments"));

    let orders = TopicRequestRepo::list(
        &pool,
        &RequestFilter {
            search: Some("ORDERS".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let mut names: Vec<_> = orders.iter().map(|r| r.topic_name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["orders-v1", "orders-v2"]);

    let first = TopicRequestRepo::list(
        &pool,
        &RequestFilter {
            limit: Some(3),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(first.len(), 3);

    let rest = TopicRequestRepo::list(
        &pool,
        &RequestFilter {
            limit: Some(3),
            offset: Some(3),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(rest.len(), 1);
    assert!(first.iter().all(|r| r.id != rest[0].id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_pending_topic_request_violates_pending_index(pool: PgPool) {
    let alice = seed_user(&pool, "alice", "payments").await;
    TopicRequestRepo::create(&pool, &topic_request("orders", "DEV"), &alice)
        .await
        .unwrap();

    let err = TopicRequestRepo::create(&pool, &topic_request("orders", "DEV"), &alice)
        .await
        .unwrap_err();
    let sqlx::Error::Database(db_err) = err else {
        panic!("expected a database error, got {err:?}");
    };
    assert_eq!(
        db_err.constraint(),
        Some(topic_request_repo::PENDING_TOPIC_REQUEST)
    );

    // Once decided, the same topic may be requested again.
    TopicRequestRepo::decline(&pool, "orders", "DEV", "admin", "wrong partitions")
        .await
        .unwrap();
    TopicRequestRepo::create(&pool, &topic_request("orders", "DEV"), &alice)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acl_request_list_by_team(pool: PgPool) {
    let bob = seed_user(&pool, "bob", "analytics").await;
    AclRequestRepo::create(&pool, &acl_request("orders", "DEV", "payments"), &bob)
        .await
        .unwrap();
    AclRequestRepo::create(&pool, &acl_request("refunds", "DEV", "analytics"), &bob)
        .await
        .unwrap();

    let analytics = AclRequestRepo::list(
        &pool,
        &RequestFilter {
            team: Some("analytics".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(analytics.len(), 1);
    assert_eq!(analytics[0].topic_name, "refunds");
}

// ---------------------------------------------------------------------------
// ACL requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acl_request_create_and_approve(pool: PgPool) {
    let user = seed_user(&pool, "bob", "analytics").await;

    let request = AclRequestRepo::create(&pool, &acl_request("orders", "DEV", "payments"), &user)
        .await
        .unwrap();
    assert_eq!(request.req_no.len(), REQUEST_ID_LENGTH);
    assert_eq!(request.requesting_team, "analytics");
    assert_eq!(request.team_name, "payments");
    assert_eq!(request.topic_status, "created");

    let log = ActivityLogRepo::query(&pool, &ActivityLogQuery::default()).await.unwrap();
    assert_eq!(log[0].activity_name, "acl");
    assert_eq!(log[0].details, "10.0.0.9-orders-null-billing-readers-Consumer");

    let approved = AclRequestRepo::approve(&pool, &request.req_no, "admin")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(approved.topic_status, "approved");

    let acls = AclRepo::list(&pool, Some("DEV")).await.unwrap();
    assert_eq!(acls.len(), 1);
    assert_eq!(acls[0].team_name, "analytics");
    assert_eq!(acls[0].consumer_group.as_deref(), Some("billing-readers"));
    assert_ne!(acls[0].req_no, request.req_no);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acl_request_approve_unknown_is_none(pool: PgPool) {
    let result = AclRequestRepo::approve(&pool, "NOPE1234", "admin").await.unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_acl_request_decline_then_approve_is_none(pool: PgPool) {
    let user = seed_user(&pool, "bob", "analytics").await;
    let request = AclRequestRepo::create(&pool, &acl_request("orders", "DEV", "payments"), &user)
        .await
        .unwrap();

    let declined = AclRequestRepo::decline(&pool, &request.req_no, "admin", "too broad")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(declined.topic_status, "declined");

    let approved = AclRequestRepo::approve(&pool, &request.req_no, "admin").await.unwrap();
    assert!(approved.is_none());
    assert!(AclRepo::list(&pool, None).await.unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Schema requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schema_request_approve_by_topic_version_env(pool: PgPool) {
    let user = seed_user(&pool, "carol", "payments").await;
    let input = CreateSchemaRequest {
        topic_name: "orders".to_string(),
        env: "DEV".to_string(),
        app_name: None,
        schema_full: r#"{"type":"string"}"#.to_string(),
        version_schema: "1".to_string(),
        remarks: None,
    };
    SchemaRequestRepo::create(&pool, &input, &user).await.unwrap();

    let wrong_version = SchemaRequestRepo::approve(
        &pool,
        SchemaKey {
            topic_name: "orders",
            version_schema: "2",
            env: "DEV",
        },
        "admin",
    )
    .await
    .unwrap();
    assert!(wrong_version.is_empty());

    let approved = SchemaRequestRepo::approve(
        &pool,
        SchemaKey {
            topic_name: "orders",
            version_schema: "1",
            env: "DEV",
        },
        "admin",
    )
    .await
    .unwrap();
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].topic_status, "approved");
    assert_eq!(approved[0].team_name, "payments");
}
