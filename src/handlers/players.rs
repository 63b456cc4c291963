use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use sqlx::SqlitePool;

use crate::{
    AppState,
    config::Settings,
    models::records::RecordBook,
    repositories::records_repo,
    responses::AppResponse,
    services::{player_service::PlayerAggregator, stats_client::StatsSource},
};

fn aggregator(
    settings: &Settings,
    source: Arc<dyn StatsSource>,
    records: Arc<RecordBook>,
) -> PlayerAggregator {
    PlayerAggregator::new(source, records)
        .with_workers(settings.workers)
        .with_scan_cap(settings.scan_cap)
        .with_recent_games(settings.recent_games)
}

async fn list_players(
    State(pool): State<SqlitePool>,
    State(source): State<Arc<dyn StatsSource>>,
    State(settings): State<Arc<Settings>>,
) -> impl IntoResponse {
    let records = match records_repo::load_records(&pool).await {
        Ok(records) => Arc::new(records),
        Err(e) => return e.into_response(),
    };
    let roster = records.roster();
    let summaries = aggregator(&settings, source, records)
        .aggregate(roster)
        .await;
    Into::<AppResponse>::into(summaries).into_response()
}

async fn player_statistics(
    Path(player_id): Path<u32>,
    State(pool): State<SqlitePool>,
    State(source): State<Arc<dyn StatsSource>>,
    State(settings): State<Arc<Settings>>,
) -> impl IntoResponse {
    let records = match records_repo::load_records(&pool).await {
        Ok(records) => Arc::new(records),
        Err(e) => return e.into_response(),
    };
    let lookup = aggregator(&settings, source, records)
        .player_statistics(player_id)
        .await;
    Into::<AppResponse>::into(lookup).into_response()
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_players))
        .route("/{id}/statistics", get(player_statistics))
        .with_state(state)
}
