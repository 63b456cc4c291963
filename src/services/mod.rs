pub mod leaderboard_service;
pub mod opening_service;
pub mod player_service;
pub mod rating_cache;
pub mod stats_client;
