pub mod game_repo;
pub mod player_repo;
pub mod records_repo;
pub mod tournament_repo;
