use std::sync::Arc;

use crate::{config::Config, render::PageRenderer};
use goaltracker_core::goals::{GoalRepositoryTrait, GoalService, GoalServiceTrait};
use goaltracker_storage_postgres::{create_pool, goals::GoalRepository, DbExecutor};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub renderer: PageRenderer,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

/// Wires the PostgreSQL goal store into the application state.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!(
        "Using database {} on {}:{}",
        config.db.name,
        config.db.host,
        config.db.port
    );
    let pool = create_pool(&config.db.database_url(), config.db_checkout_timeout);
    let goal_repository: Arc<dyn GoalRepositoryTrait> =
        Arc::new(GoalRepository::new(DbExecutor::new(pool)));
    build_state_with_store(config, goal_repository)
}

/// Builds the application state around any goal store.
pub fn build_state_with_store(
    config: &Config,
    goal_repository: Arc<dyn GoalRepositoryTrait>,
) -> anyhow::Result<Arc<AppState>> {
    let goal_service = Arc::new(GoalService::new(goal_repository));
    let renderer = PageRenderer::new(config.app_version.clone())?;
    Ok(Arc::new(AppState {
        goal_service,
        renderer,
    }))
}
