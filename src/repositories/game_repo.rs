use sqlx::prelude::FromRow;

use crate::models::game::{Game, GameResult};

#[derive(Debug, FromRow)]
pub struct DbGame {
    pub id: u32,
    pub ply1_id: u32,
    pub ply2_id: u32,
    pub tournament_id: Option<u32>,
    pub round: u32,
    pub result: Option<String>,
    pub link: Option<String>,
}

impl From<DbGame> for Game {
    fn from(value: DbGame) -> Self {
        Self {
            id: value.id,
            first_id: value.ply1_id,
            second_id: value.ply2_id,
            tournament_id: value.tournament_id,
            round: value.round,
            result: GameResult::from_opt(value.result.as_deref()),
            link: value.link,
        }
    }
}

pub async fn list_games(pool: &sqlx::SqlitePool) -> sqlx::Result<Vec<Game>> {
    let rows: Vec<DbGame> = sqlx::query_as(
        "select id, ply1_id, ply2_id, tournament_id, round, result, link from games order by id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Game::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures(
        path = "../../fixtures",
        scripts("create_players", "create_tournaments", "create_games")
    ))]
    async fn test_list_games(pool: sqlx::SqlitePool) {
        let games = list_games(&pool).await.expect("failed to list games");
        assert_eq!(games.len(), 4);
        assert_eq!(games[0].result, GameResult::FirstWins);
        assert_eq!(games[3].result, GameResult::Unset);
        assert_eq!(games[3].tournament_id, None);
        assert_eq!(
            games[1].link.as_deref(),
            Some("https://www.chess.com/game/live/2")
        );
    }
}
