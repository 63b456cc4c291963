use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: u32,
    pub chess_id: String,
    pub name: String,
    pub player_class: String,
    pub bio: String,
}
