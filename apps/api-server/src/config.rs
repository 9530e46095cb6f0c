//! Application configuration loaded from environment variables.

use std::env;

use postbook_infra::DatabaseConfig;

/// Default cap on a JSON request body. Post content is unbounded, so this sits
/// far above actix's 2 MiB default.
pub const DEFAULT_JSON_BODY_LIMIT: usize = 256 * 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the server on the in-memory store.
    pub database: Option<DatabaseConfig>,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
    /// Largest accepted JSON body, in bytes.
    pub json_body_limit: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let database = get("DATABASE_URL").map(|url| {
            let mut db = DatabaseConfig::new(url);
            if let Some(max) = get("DB_MAX_CONNECTIONS").and_then(|s| s.parse().ok()) {
                db.max_connections = max;
            }
            if let Some(min) = get("DB_MIN_CONNECTIONS").and_then(|s| s.parse().ok()) {
                db.min_connections = min;
            }
            db
        });

        Self {
            host: get("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: get("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
            auto_migrate: get("DB_AUTO_MIGRATE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            json_body_limit: get("JSON_BODY_LIMIT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_JSON_BODY_LIMIT),
        }
    }
}
