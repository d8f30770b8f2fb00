// src/state.rs

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::config::Config;
use crate::external::StatsProvider;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    /// External coding-platform stats collaborator.
    /// Behind a trait object so tests can inject a fake.
    pub stats: Arc<dyn StatsProvider>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<dyn StatsProvider> {
    fn from_ref(state: &AppState) -> Self {
        state.stats.clone()
    }
}
