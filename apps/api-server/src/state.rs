//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use postbook_core::PostService;
use postbook_core::ports::PostRepository;
use postbook_infra::InMemoryPostRepository;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
}

impl AppState {
    pub fn new(posts: PostService) -> Self {
        Self { posts }
    }

    /// Build the application state with the configured storage backend.
    pub async fn init(config: &AppConfig) -> io::Result<Self> {
        let repo = post_repository(config).await?;
        tracing::info!("Application state initialized");
        Ok(Self::new(PostService::new(repo)))
    }
}

#[cfg(feature = "postgres")]
async fn post_repository(config: &AppConfig) -> io::Result<Arc<dyn PostRepository>> {
    use migration::{Migrator, MigratorTrait};
    use postbook_infra::PostgresPostRepository;
    use postbook_infra::database::connect;

    let Some(db_config) = config.database.as_ref() else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return Ok(Arc::new(InMemoryPostRepository::new()));
    };

    let conn = connect(db_config).await.map_err(|e| {
        tracing::error!("Failed to connect to database: {}", e);
        io::Error::other(e)
    })?;

    if config.auto_migrate {
        Migrator::up(&conn, None).await.map_err(|e| {
            tracing::error!("Failed to apply migrations: {}", e);
            io::Error::other(e)
        })?;
        tracing::info!("Database migrations applied");
    }

    Ok(Arc::new(PostgresPostRepository::new(conn)))
}

#[cfg(not(feature = "postgres"))]
async fn post_repository(config: &AppConfig) -> io::Result<Arc<dyn PostRepository>> {
    if config.database.is_some() {
        tracing::warn!("DATABASE_URL ignored - built without postgres feature");
    }
    tracing::info!("Using in-memory post repository");
    Ok(Arc::new(InMemoryPostRepository::new()))
}
