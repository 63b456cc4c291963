use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinSet;

use crate::{
    config::{DEFAULT_RECENT_GAMES, DEFAULT_SCAN_CAP, DEFAULT_WORKERS},
    models::{
        player::Player,
        records::{RecentGame, RecordBook},
        stats::{OpeningStat, TimeControlPerformance, Trend, performance_label},
    },
    services::{opening_service::OpeningAnalyzer, stats_client::StatsSource},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub openings: Vec<OpeningStat>,
    pub performance: TimeControlPerformance,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub id: u32,
    pub name: String,
    pub bio: String,
    pub title: String,
    pub trend: Trend,
    pub rating: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub performance: String,
    pub achievements: Vec<String>,
    pub tournaments: Vec<String>,
    pub recent_games: Vec<RecentGame>,
    pub stats: PlayerStats,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub openings: Vec<OpeningStat>,
    pub yearly_rating: Vec<u32>,
    pub recent_games: Vec<RecentGame>,
}

#[derive(Debug, PartialEq)]
pub enum StatisticsLookup {
    Found {
        player_id: u32,
        statistics: PlayerStatistics,
    },
    NotFound {
        player_id: u32,
    },
}

/// Builds per-player summaries from live stats and the stored records.
#[derive(Clone)]
pub struct PlayerAggregator {
    source: Arc<dyn StatsSource>,
    records: Arc<RecordBook>,
    workers: usize,
    scan_cap: usize,
    recent_games: usize,
}

impl PlayerAggregator {
    pub fn new(source: Arc<dyn StatsSource>, records: Arc<RecordBook>) -> Self {
        Self {
            source,
            records,
            workers: DEFAULT_WORKERS,
            scan_cap: DEFAULT_SCAN_CAP,
            recent_games: DEFAULT_RECENT_GAMES,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_scan_cap(mut self, scan_cap: usize) -> Self {
        self.scan_cap = scan_cap;
        self
    }

    pub fn with_recent_games(mut self, recent_games: usize) -> Self {
        self.recent_games = recent_games;
        self
    }

    async fn favorite_openings(&self, external_id: &str) -> Vec<OpeningStat> {
        let archive_urls = self.source.archive_urls(external_id).await;
        if archive_urls.is_empty() {
            return Vec::new();
        }
        OpeningAnalyzer::new(self.source.as_ref())
            .with_scan_cap(self.scan_cap)
            .favorite_openings(external_id, &archive_urls)
            .await
    }

    pub async fn summarize(&self, player: &Player) -> PlayerSummary {
        let profile = self.source.profile_stats(&player.chess_id).await;
        let recent_games = self.records.recent_games(player.id, self.recent_games);
        let openings = self.favorite_openings(&player.chess_id).await;
        PlayerSummary {
            id: player.id,
            name: player.name.clone(),
            bio: player.bio.clone(),
            title: player.player_class.clone(),
            trend: Trend::from_record(&profile.record),
            rating: profile.rating,
            wins: profile.record.wins,
            losses: profile.record.losses,
            draws: profile.record.draws,
            performance: performance_label(&profile.record),
            achievements: self.records.achievements_for(player.id),
            tournaments: self.records.tournaments_for(player.id),
            recent_games,
            stats: PlayerStats {
                openings,
                performance: profile.performance,
            },
        }
    }

    /// Summaries in completion order, one per player.
    pub async fn aggregate(&self, players: Vec<Player>) -> Vec<PlayerSummary> {
        self.fan_out(players)
            .await
            .into_iter()
            .map(|(_, summary)| summary)
            .collect()
    }

    /// Summaries in the order the players were given.
    pub async fn aggregate_ordered(&self, players: Vec<Player>) -> Vec<PlayerSummary> {
        let mut results = self.fan_out(players).await;
        results.sort_by_key(|(index, _)| *index);
        results.into_iter().map(|(_, summary)| summary).collect()
    }

    /// Runs at most `workers` summaries at a time; a new one starts as soon as
    /// a running one finishes.
    async fn fan_out(&self, players: Vec<Player>) -> Vec<(usize, PlayerSummary)> {
        let total = players.len();
        let mut tasks = JoinSet::new();
        let mut results = Vec::with_capacity(total);
        for (index, player) in players.into_iter().enumerate() {
            if tasks.len() >= self.workers {
                collect_next(&mut tasks, &mut results).await;
            }
            let aggregator = self.clone();
            tasks.spawn(async move { (index, aggregator.summarize(&player).await) });
        }
        while !tasks.is_empty() {
            collect_next(&mut tasks, &mut results).await;
        }
        tracing::info!("aggregated {} of {} players", results.len(), total);
        results
    }

    pub async fn player_statistics(&self, player_id: u32) -> StatisticsLookup {
        let Some(player) = self.records.player(player_id) else {
            return StatisticsLookup::NotFound { player_id };
        };
        let recent_games = self.records.recent_games(player.id, self.recent_games);
        let openings = self.favorite_openings(&player.chess_id).await;
        StatisticsLookup::Found {
            player_id,
            statistics: PlayerStatistics {
                openings,
                yearly_rating: Vec::new(),
                recent_games,
            },
        }
    }
}

async fn collect_next(
    tasks: &mut JoinSet<(usize, PlayerSummary)>,
    results: &mut Vec<(usize, PlayerSummary)>,
) {
    match tasks.join_next().await {
        Some(Ok(result)) => results.push(result),
        Some(Err(e)) => tracing::error!("player aggregation task failed: {}", e),
        None => {}
    }
}
