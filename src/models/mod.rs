pub mod game;
pub mod pgn;
pub mod player;
pub mod records;
pub mod stats;
pub mod tournament;
