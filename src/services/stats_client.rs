use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    errors::AppError,
    models::stats::{TimeControlPerformance, WinLossDraw},
};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Profile figures for one player. The headline rating and record come from rapid play.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileStats {
    pub rating: u32,
    pub record: WinLossDraw,
    pub performance: TimeControlPerformance,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArchivedGame {
    pub pgn: String,
}

/// Source of live player data. Implementations never fail: any problem with the
/// upstream service turns into zero or empty values.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn profile_stats(&self, external_id: &str) -> ProfileStats;
    async fn archive_urls(&self, external_id: &str) -> Vec<String>;
    async fn archive_games(&self, url: &str) -> Vec<ArchivedGame>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StatsResponse {
    chess_bullet: ModeStats,
    chess_rapid: ModeStats,
    chess_blitz: ModeStats,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModeStats {
    last: LastRating,
    record: ModeRecord,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LastRating {
    rating: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ModeRecord {
    win: u32,
    loss: u32,
    draw: u32,
}

impl From<&ModeRecord> for WinLossDraw {
    fn from(value: &ModeRecord) -> Self {
        Self {
            wins: value.win,
            losses: value.loss,
            draws: value.draw,
        }
    }
}

impl From<StatsResponse> for ProfileStats {
    fn from(value: StatsResponse) -> Self {
        let record = WinLossDraw::from(&value.chess_rapid.record);
        Self {
            rating: value.chess_rapid.last.rating,
            record,
            performance: TimeControlPerformance {
                bullet: WinLossDraw::from(&value.chess_bullet.record).into(),
                rapid: record.into(),
                blitz: WinLossDraw::from(&value.chess_blitz.record).into(),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArchivesResponse {
    archives: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArchiveResponse {
    games: Vec<ArchivedGame>,
}

pub fn http_client(timeout_secs: u64) -> Result<Client, AppError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| AppError::InvalidConfig(format!("cannot build http client: {}", e)))
}

/// Client for the public chess.com API.
pub struct ChessComClient {
    client: Client,
    base_url: String,
}

impl ChessComClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        tracing::debug!("GET {}", url);
        let res = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::StatsRequestFailed(format!("Request error: {}", e)))?;
        if !res.status().is_success() {
            return Err(AppError::StatsStatus(res.status().as_u16()));
        }
        let body = res
            .bytes()
            .await
            .map_err(|e| AppError::StatsRequestFailed(format!("Body error: {}", e)))?;
        serde_json::from_slice(&body).map_err(|e| AppError::StatsPayload(e.to_string()))
    }

    pub async fn try_profile_stats(&self, external_id: &str) -> Result<ProfileStats, AppError> {
        let url = format!("{}/pub/player/{}/stats", self.base_url, external_id);
        let stats: StatsResponse = self.get_json(&url).await?;
        Ok(stats.into())
    }

    pub async fn try_archive_urls(&self, external_id: &str) -> Result<Vec<String>, AppError> {
        let url = format!("{}/pub/player/{}/games/archives", self.base_url, external_id);
        let archives: ArchivesResponse = self.get_json(&url).await?;
        Ok(archives.archives)
    }

    pub async fn try_archive_games(&self, url: &str) -> Result<Vec<ArchivedGame>, AppError> {
        let archive: ArchiveResponse = self.get_json(url).await?;
        Ok(archive.games)
    }
}

#[async_trait]
impl StatsSource for ChessComClient {
    async fn profile_stats(&self, external_id: &str) -> ProfileStats {
        self.try_profile_stats(external_id).await.unwrap_or_else(|e| {
            tracing::warn!("profile stats for {} unavailable: {}", external_id, e);
            ProfileStats::default()
        })
    }

    async fn archive_urls(&self, external_id: &str) -> Vec<String> {
        self.try_archive_urls(external_id).await.unwrap_or_else(|e| {
            tracing::warn!("game archives for {} unavailable: {}", external_id, e);
            Vec::new()
        })
    }

    async fn archive_games(&self, url: &str) -> Vec<ArchivedGame> {
        self.try_archive_games(url).await.unwrap_or_else(|e| {
            tracing::warn!("archive {} unavailable: {}", url, e);
            Vec::new()
        })
    }
}
