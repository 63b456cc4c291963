use std::collections::HashMap;

use sqlx::prelude::FromRow;

use crate::models::tournament::{Place, Placement, Tournament};

#[derive(Debug, FromRow)]
pub struct DbTournament {
    pub id: u32,
    pub name: String,
    pub currently_active: bool,
}

#[derive(Debug, FromRow)]
pub struct DbPlacement {
    pub tournament_id: u32,
    pub player_id: u32,
    pub place: u32,
}

pub async fn list_tournaments(pool: &sqlx::SqlitePool) -> sqlx::Result<Vec<Tournament>> {
    let tournaments: Vec<DbTournament> =
        sqlx::query_as("select id, name, currently_active from tournaments order by id")
            .fetch_all(pool)
            .await?;
    let placements: Vec<DbPlacement> = sqlx::query_as(
        "select tournament_id, player_id, place from tournament_placements order by tournament_id, place, player_id",
    )
    .fetch_all(pool)
    .await?;

    let mut by_tournament: HashMap<u32, Vec<Placement>> = HashMap::new();
    for row in placements {
        match Place::from_rank(row.place) {
            Some(place) => by_tournament
                .entry(row.tournament_id)
                .or_default()
                .push(Placement {
                    player_id: row.player_id,
                    place,
                }),
            None => tracing::warn!(
                "ignoring placement {} for player {} in tournament {}",
                row.place,
                row.player_id,
                row.tournament_id
            ),
        }
    }
    Ok(tournaments
        .into_iter()
        .map(|t| Tournament {
            placements: by_tournament.remove(&t.id).unwrap_or_default(),
            id: t.id,
            name: t.name,
            currently_active: t.currently_active,
        })
        .collect())
}
