use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kafkamgt_api::app::build_router;
use kafkamgt_api::bootstrap;
use kafkamgt_api::config::ServerConfig;
use kafkamgt_api::state::AppState;
use kafkamgt_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "kafkamgt_api=debug,kafkamgt_db=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );
    tracing::info!(%addr, timeout_secs = config.request_timeout_secs, "Configuration loaded");

    let pool = prepare_database().await;

    if let Some(admin) = &config.bootstrap_admin {
        let created = bootstrap::ensure_admin(&pool, admin)
            .await
            .expect("Failed to create bootstrap admin");
        if !created {
            tracing::debug!(user_id = %admin.username, "Bootstrap admin already present");
        }
    }

    let app = build_router(AppState {
        pool,
        config: Arc::new(config),
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    tracing::info!(%addr, "Kafka management API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Shut down cleanly");
}

/// Connect, verify reachability and bring the schema up to date.
///
/// Any failure here aborts start-up.
async fn prepare_database() -> DbPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = kafkamgt_db::create_pool(&url)
        .await
        .expect("Failed to connect to PostgreSQL");
    kafkamgt_db::health_check(&pool)
        .await
        .expect("PostgreSQL did not answer a health query");
    kafkamgt_db::run_migrations(&pool)
        .await
        .expect("Failed to apply migrations");

    tracing::info!("Database ready");
    pool
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Draining in-flight requests");
}
