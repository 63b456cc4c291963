use crate::{
    errors::AppError,
    models::records::RecordBook,
    repositories::{game_repo, player_repo, tournament_repo},
};

/// Reads every player, game and tournament into one snapshot.
pub async fn load_records(pool: &sqlx::SqlitePool) -> Result<RecordBook, AppError> {
    let players = player_repo::list_players(pool).await?;
    let games = game_repo::list_games(pool).await?;
    let tournaments = tournament_repo::list_tournaments(pool).await?;
    tracing::debug!(
        "loaded {} players, {} games, {} tournaments",
        players.len(),
        games.len(),
        tournaments.len()
    );
    Ok(RecordBook::new(players, games, tournaments))
}

#[cfg(test)]
mod tests {
    use sqlx::SqlitePool;

    use super::*;

    #[sqlx::test(fixtures(
        path = "../../fixtures",
        scripts("create_players", "create_tournaments", "create_games")
    ))]
    async fn test_load_records(pool: SqlitePool) {
        let records = load_records(&pool).await.expect("failed to load records");
        assert_eq!(records.players.len(), 3);
        assert_eq!(
            records.active_tournament().map(|t| t.name.as_str()),
            Some("Summer Open")
        );
        assert_eq!(records.achievements_for(1), vec!["Champion of Spring Cup"]);
        assert_eq!(records.tournaments_for(3), vec!["Summer Open"]);
        assert_eq!(records.recent_games(1, 6).len(), 3);
    }

    #[sqlx::test]
    async fn test_load_empty_records(pool: SqlitePool) {
        let records = load_records(&pool).await.expect("failed to load records");
        assert!(records.players.is_empty());
        assert!(records.active_tournament().is_none());
    }
}
