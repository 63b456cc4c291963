use std::collections::HashMap;

use itertools::Itertools;
use serde::Serialize;

use crate::models::{
    game::Game,
    player::Player,
    tournament::{Place, Tournament},
};

/// Read-only snapshot of the stored players, games and tournaments.
#[derive(Debug, Default)]
pub struct RecordBook {
    pub players: HashMap<u32, Player>,
    pub games: Vec<Game>,
    pub tournaments: Vec<Tournament>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentGame {
    pub opponent: Option<String>,
    pub result: Option<String>,
    pub date: Option<String>,
    pub event: Option<String>,
}

impl RecordBook {
    pub fn new(players: Vec<Player>, games: Vec<Game>, mut tournaments: Vec<Tournament>) -> Self {
        tournaments.sort_by_key(|t| t.id);
        Self {
            players: players.into_iter().map(|p| (p.id, p)).collect(),
            games,
            tournaments,
        }
    }

    pub fn player(&self, id: u32) -> Option<&Player> {
        self.players.get(&id)
    }

    /// Players in id order.
    pub fn roster(&self) -> Vec<Player> {
        self.players
            .values()
            .sorted_unstable_by_key(|p| p.id)
            .cloned()
            .collect()
    }

    pub fn tournament(&self, id: u32) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn active_tournament(&self) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.currently_active)
    }

    /// Games of a tournament ordered by round; games of one round keep their stored order.
    pub fn tournament_games(&self, tournament_id: u32) -> Vec<Game> {
        self.games
            .iter()
            .filter(|g| g.tournament_id == Some(tournament_id))
            .sorted_by_key(|g| (g.round, g.id))
            .cloned()
            .collect()
    }

    /// The `limit` latest games involving the player, newest first.
    pub fn recent_games(&self, player_id: u32, limit: usize) -> Vec<RecentGame> {
        self.games
            .iter()
            .filter_map(|g| g.side_of(player_id).map(|side| (g, side)))
            .sorted_by(|(a, _), (b, _)| b.id.cmp(&a.id))
            .take(limit)
            .map(|(game, side)| RecentGame {
                opponent: self
                    .player(game.player_on(side.other()))
                    .map(|p| p.name.clone()),
                result: game.result.as_text(),
                date: None,
                event: game
                    .tournament_id
                    .and_then(|id| self.tournament(id))
                    .map(|t| t.name.clone()),
            })
            .collect()
    }

    /// Distinct names of the tournaments the player has a game in.
    pub fn tournaments_for(&self, player_id: u32) -> Vec<String> {
        self.games
            .iter()
            .filter(|g| g.side_of(player_id).is_some())
            .filter_map(|g| g.tournament_id)
            .unique()
            .filter_map(|id| self.tournament(id))
            .sorted_by_key(|t| t.id)
            .map(|t| t.name.clone())
            .unique()
            .collect()
    }

    /// Podium finishes: champion titles first, then runner-up, then second runner-up.
    pub fn achievements_for(&self, player_id: u32) -> Vec<String> {
        [Place::Champion, Place::RunnerUp, Place::SecondRunnerUp]
            .into_iter()
            .flat_map(|place| {
                self.tournaments
                    .iter()
                    .filter_map(move |t| t.achievement_for(player_id, place))
            })
            .collect()
    }
}
