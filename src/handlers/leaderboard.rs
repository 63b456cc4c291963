use std::sync::Arc;

use axum::{Router, extract::State, response::IntoResponse, routing::get};
use sqlx::SqlitePool;

use crate::{
    AppState,
    repositories::records_repo,
    responses::AppResponse,
    services::{leaderboard_service::compute_leaderboard, stats_client::StatsSource},
};

async fn get_leaderboard(
    State(pool): State<SqlitePool>,
    State(source): State<Arc<dyn StatsSource>>,
) -> impl IntoResponse {
    let records = match records_repo::load_records(&pool).await {
        Ok(records) => records,
        Err(e) => return e.into_response(),
    };
    let outcome = compute_leaderboard(source.as_ref(), &records).await;
    Into::<AppResponse>::into(outcome).into_response()
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(get_leaderboard))
        .with_state(state)
}
