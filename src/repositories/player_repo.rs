use crate::models::player::Player;

pub async fn list_players(pool: &sqlx::SqlitePool) -> sqlx::Result<Vec<Player>> {
    sqlx::query_as("select id, chess_id, name, player_class, bio from players order by id")
        .fetch_all(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("create_players")))]
    async fn test_list_players(pool: sqlx::SqlitePool) {
        let players = list_players(&pool).await.expect("failed to list players");
        assert_eq!(players.len(), 3);
        assert_eq!(players[0].name, "Magnus Carlsen");
        assert_eq!(players[0].chess_id, "MagnusCarlsen");
        assert_eq!(players[2].bio, "");
    }
}
