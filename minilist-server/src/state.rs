//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: Option<PgPool>,
    config: ServerConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool: Some(pool),
                config,
            }),
        }
    }

    /// State for a deployment without `DATABASE_URL`.
    ///
    /// The server still starts so the misconfiguration is observable over
    /// HTTP: every data request answers 500 without touching a store.
    pub fn unconfigured(config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool: None, config }),
        }
    }

    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }
}
