use error_stack::{Result, ResultExt};
use std::sync::Arc;
use thiserror::Error;

use crate::{config, database::Database};

#[derive(Debug, Clone)]
pub struct App {
    pub config: Arc<config::Server>,
    pub db: Database,
}

#[derive(Debug, Error)]
#[error("Failed to initialize App struct")]
pub struct AppError;

impl App {
    #[tracing::instrument(skip_all)]
    pub async fn new(cfg: config::Server) -> Result<Self, AppError> {
        let db = if let Some(db) = cfg.db.as_ref() {
            Database::connect(db).await.change_context(AppError)?
        } else {
            tracing::warn!("No database configured, users and posts will be kept in memory");
            Database::in_memory()
        };

        Ok(Self::with_database(cfg, db))
    }

    #[must_use]
    pub fn with_database(cfg: config::Server, db: Database) -> Self {
        Self {
            config: Arc::new(cfg),
            db,
        }
    }

    #[must_use]
    pub fn jwt_secret(&self) -> &str {
        self.config.auth.jwt_secret.as_str()
    }
}
