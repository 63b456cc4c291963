use std::collections::HashMap;

use serde::Serialize;

use crate::{
    models::{
        game::{Game, Side},
        player::Player,
        records::RecordBook,
        tournament::Tournament,
    },
    services::{rating_cache::RatingCache, stats_client::StatsSource},
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Round {
    pub id: u32,
    pub name: String,
}

impl Round {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            name: format!("Round {}", id),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub round: u32,
    pub rank: usize,
    pub name: String,
    pub rating: u32,
    pub score: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundStandings {
    pub round: Round,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub tournament_name: Option<String>,
    pub rounds: Vec<Round>,
    pub standings: Vec<RoundStandings>,
    pub current_leader: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum LeaderboardOutcome {
    NoActiveTournament,
    Standings(Leaderboard),
}

impl LeaderboardOutcome {
    /// The leaderboard, empty when no tournament is active.
    pub fn into_leaderboard(self) -> Leaderboard {
        match self {
            LeaderboardOutcome::NoActiveTournament => Leaderboard::default(),
            LeaderboardOutcome::Standings(board) => board,
        }
    }
}

/// Folds a tournament's games into cumulative per-round standings.
///
/// Every game adds one row per side to its round, so a player with several games
/// in a round shows up several times in that round's standings. Ratings come
/// from a cache that lives for one computation.
pub struct LeaderboardEngine<'a> {
    source: &'a dyn StatsSource,
    cache: RatingCache,
}

impl<'a> LeaderboardEngine<'a> {
    pub fn new(source: &'a dyn StatsSource) -> Self {
        Self {
            source,
            cache: RatingCache::new(),
        }
    }

    pub async fn compute(
        &self,
        tournament: Option<&Tournament>,
        games: &[Game],
        players: &HashMap<u32, Player>,
    ) -> LeaderboardOutcome {
        let Some(tournament) = tournament else {
            return LeaderboardOutcome::NoActiveTournament;
        };
        let mut ordered: Vec<&Game> = games.iter().collect();
        ordered.sort_by_key(|g| g.round);

        let mut scores: HashMap<&str, f64> = HashMap::new();
        let mut standings: Vec<RoundStandings> = Vec::new();
        let mut round_index: HashMap<u32, usize> = HashMap::new();

        for game in ordered {
            let (Some(first), Some(second)) =
                (players.get(&game.first_id), players.get(&game.second_id))
            else {
                tracing::warn!("game {} references an unknown player, skipping", game.id);
                continue;
            };
            let slot = *round_index.entry(game.round).or_insert_with(|| {
                standings.push(RoundStandings {
                    round: Round::new(game.round),
                    entries: Vec::new(),
                });
                standings.len() - 1
            });
            for (player, side) in [(first, Side::First), (second, Side::Second)] {
                *scores.entry(player.name.as_str()).or_default() += game.result.points(side);
            }
            for player in [first, second] {
                let rating = self.cache.rating(self.source, &player.chess_id).await;
                standings[slot].entries.push(LeaderboardEntry {
                    round: game.round,
                    rank: 0,
                    name: player.name.clone(),
                    rating,
                    score: scores[player.name.as_str()],
                });
            }
        }

        for round in standings.iter_mut() {
            round.entries.sort_by(|a, b| b.score.total_cmp(&a.score));
            for (i, entry) in round.entries.iter_mut().enumerate() {
                entry.rank = i + 1;
            }
        }
        standings.sort_by_key(|s| s.round.id);

        let current_leader = standings
            .last()
            .and_then(|s| s.entries.first())
            .map(|e| e.name.clone());
        tracing::info!(
            "leaderboard for {}: {} rounds, leader {:?}",
            tournament.name,
            standings.len(),
            current_leader
        );
        LeaderboardOutcome::Standings(Leaderboard {
            tournament_name: Some(tournament.name.clone()),
            rounds: standings.iter().map(|s| s.round.clone()).collect(),
            standings,
            current_leader,
        })
    }
}

/// Leaderboard of the currently active tournament in `records`.
pub async fn compute_leaderboard(
    source: &dyn StatsSource,
    records: &RecordBook,
) -> LeaderboardOutcome {
    let tournament = records.active_tournament();
    let games = tournament
        .map(|t| records.tournament_games(t.id))
        .unwrap_or_default();
    LeaderboardEngine::new(source)
        .compute(tournament, &games, &records.players)
        .await
}
