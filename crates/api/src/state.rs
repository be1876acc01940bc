use std::sync::Arc;

use crate::config::ServerConfig;

/// Handed to every handler through `State<AppState>`; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub pool: kafkamgt_db::DbPool,
    /// Read by the auth extractor for JWT settings.
    pub config: Arc<ServerConfig>,
}
