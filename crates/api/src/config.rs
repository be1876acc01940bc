use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server, read once at start-up.
///
/// | Env Var                    | Default                    |
/// |----------------------------|----------------------------|
/// | `HOST`                     | `0.0.0.0`                  |
/// | `PORT`                     | `3000`                     |
/// | `CORS_ORIGINS`             | `http://localhost:5173`    |
/// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
/// | `BOOTSTRAP_ADMIN_USERNAME` | unset                      |
/// | `BOOTSTRAP_ADMIN_PASSWORD` | unset                      |
///
/// JWT settings are documented on [`JwtConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Comma-separated in `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
    /// Admin account created at start-up when missing.
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Credentials for the start-up admin account.
#[derive(Clone)]
pub struct BootstrapAdmin {
    pub username: String,
    pub password: String,
}

/// Written in place of secrets in `Debug` output.
pub(crate) const REDACTED: &str = "<redacted>";

impl Debug for BootstrapAdmin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapAdmin")
            .field("username", &self.username)
            .field("password", &REDACTED)
            .finish()
    }
}

impl ServerConfig {
    /// # Panics
    ///
    /// Panics on unparsable numbers and on a missing `JWT_SECRET`; bad
    /// configuration should stop the server before it binds.
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0".to_string()),
            port: env_or("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
            bootstrap_admin: BootstrapAdmin::from_env(),
        }
    }
}

impl BootstrapAdmin {
    /// Both variables must be set and non-empty.
    fn from_env() -> Option<Self> {
        let username = std::env::var("BOOTSTRAP_ADMIN_USERNAME").ok()?;
        let password = std::env::var("BOOTSTRAP_ADMIN_PASSWORD").ok()?;
        (!username.is_empty() && !password.is_empty()).then_some(Self { username, password })
    }
}

/// Parse `key` from the environment, falling back to `default` when unset.
///
/// # Panics
///
/// Panics when the variable is set but does not parse as `T`.
pub(crate) fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} has an invalid value {raw:?}: {e:?}")),
        Err(_) => default,
    }
}
