use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// HMAC secret used to sign bearer tokens.
    pub jwt_secret: String,
    /// Bearer token lifetime in hours (default: 720)
    pub jwt_expiry_hours: i64,
    /// Path to SQLite database file (default: "lifequest.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
    /// Credentials for the seeded admin account.
    pub admin_email: String,
    pub admin_password: String,
}

const DEV_JWT_SECRET: &str = "lifequest-dev-secret-change-me";

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `JWT_SECRET` - Token signing secret (a development default is used when unset)
    /// - `JWT_EXPIRY_HOURS` - Token lifetime in hours (default: 720)
    /// - `SQLITE_PATH` - SQLite database path (default: "lifequest.db")
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    /// - `ADMIN_EMAIL` / `ADMIN_PASSWORD` - Seeded admin credentials
    pub fn from_env() -> Self {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            DEV_JWT_SECRET.to_string()
        });

        Self {
            jwt_secret,
            jwt_expiry_hours: env::var("JWT_EXPIRY_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|hours: &i64| *hours > 0)
                .unwrap_or(720),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "lifequest.db".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@lifequest.local".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "changeme".to_string()),
        }
    }

    /// Token lifetime as a chrono duration.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::hours(self.jwt_expiry_hours)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jwt_secret: DEV_JWT_SECRET.to_string(),
            jwt_expiry_hours: 720,
            sqlite_path: "lifequest.db".to_string(),
            request_timeout_secs: 10,
            admin_email: "admin@lifequest.local".to_string(),
            admin_password: "changeme".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_conversions() {
        let config = Config {
            jwt_expiry_hours: 2,
            request_timeout_secs: 30,
            ..Config::default()
        };

        assert_eq!(config.token_ttl(), chrono::Duration::hours(2));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();

        assert_eq!(config.jwt_expiry_hours, 720);
        assert_eq!(config.sqlite_path, "lifequest.db");
        assert_eq!(config.request_timeout_secs, 10);
    }
}
