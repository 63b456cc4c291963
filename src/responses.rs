use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::{
    errors::AppError,
    services::{
        leaderboard_service::{Leaderboard, LeaderboardOutcome},
        player_service::{PlayerStatistics, PlayerSummary, StatisticsLookup},
    },
};

#[derive(Debug, Serialize)]
#[serde(tag = "status")]
#[serde(rename_all = "camelCase")]
pub enum AppResponse {
    Error { error: ErrorResponse },
    Success { payload: SuccessResponse },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing)]
    pub status_code: StatusCode,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(rename_all_fields = "camelCase")]
#[serde(tag = "type")]
pub enum SuccessResponse {
    PlayerList {
        players: Vec<PlayerSummary>,
    },
    PlayerStatistics {
        player_id: u32,
        #[serde(flatten)]
        statistics: PlayerStatistics,
    },
    PlayerNotFound {
        player_id: u32,
        #[serde(flatten)]
        statistics: PlayerStatistics,
    },
    Leaderboard {
        #[serde(flatten)]
        leaderboard: Leaderboard,
    },
    NoActiveTournament {
        #[serde(flatten)]
        leaderboard: Leaderboard,
    },
}

impl From<Vec<PlayerSummary>> for AppResponse {
    fn from(value: Vec<PlayerSummary>) -> Self {
        Self::Success {
            payload: SuccessResponse::PlayerList { players: value },
        }
    }
}

impl From<StatisticsLookup> for AppResponse {
    fn from(value: StatisticsLookup) -> Self {
        let payload = match value {
            StatisticsLookup::Found {
                player_id,
                statistics,
            } => SuccessResponse::PlayerStatistics {
                player_id,
                statistics,
            },
            StatisticsLookup::NotFound { player_id } => SuccessResponse::PlayerNotFound {
                player_id,
                statistics: PlayerStatistics::default(),
            },
        };
        Self::Success { payload }
    }
}

impl From<LeaderboardOutcome> for AppResponse {
    fn from(value: LeaderboardOutcome) -> Self {
        let payload = match value {
            LeaderboardOutcome::NoActiveTournament => SuccessResponse::NoActiveTournament {
                leaderboard: Leaderboard::default(),
            },
            LeaderboardOutcome::Standings(leaderboard) => {
                SuccessResponse::Leaderboard { leaderboard }
            }
        };
        Self::Success { payload }
    }
}

impl IntoResponse for AppResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppResponse::Error { error: e } => (e.status_code, Json(e)).into_response(),
            AppResponse::Success { payload: _ } => (StatusCode::OK, Json(self)).into_response(),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::StatsRequestFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::StatsStatus(_) => StatusCode::BAD_GATEWAY,
            AppError::StatsPayload(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();
        AppResponse::Error {
            error: ErrorResponse {
                code: self.code(),
                message: format!("{}", self),
                status_code,
            },
        }
        .into_response()
    }
}
