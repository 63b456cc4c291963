use std::sync::Arc;

use axum::{Router, extract::FromRef};
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Settings,
    handlers::{leaderboard, players},
    services::stats_client::StatsSource,
};

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod responses;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub source: Arc<dyn StatsSource>,
    pub settings: Arc<Settings>,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(input: &AppState) -> Self {
        input.pool.clone()
    }
}

impl FromRef<AppState> for Arc<dyn StatsSource> {
    fn from_ref(input: &AppState) -> Self {
        input.source.clone()
    }
}

impl FromRef<AppState> for Arc<Settings> {
    fn from_ref(input: &AppState) -> Self {
        input.settings.clone()
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/players", players::routes(state.clone()))
        .nest("/leaderboard", leaderboard::routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}
