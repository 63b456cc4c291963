use std::sync::Arc;

use chess_stats::{
    AppState, app,
    config::Settings,
    errors::AppError,
    services::stats_client::{ChessComClient, StatsSource, http_client},
};
use sqlx::sqlite::SqlitePoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chess_stats=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let settings = Settings::from_env()?;
    let pool = SqlitePoolOptions::new().connect(&settings.database_url).await?;
    sqlx::migrate!().run(&pool).await?;
    let client = http_client(settings.timeout_secs)?;
    let source: Arc<dyn StatsSource> =
        Arc::new(ChessComClient::new(client, settings.api_base_url.clone()));
    let addr = settings.bind_addr;
    let state = AppState {
        pool,
        source,
        settings: Arc::new(settings),
    };
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
