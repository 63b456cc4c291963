use std::fmt::Display;

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum GameResult {
    FirstWins,
    SecondWins,
    Draw,
    #[default]
    Unset,
}

impl GameResult {
    pub fn from_str<S: AsRef<str>>(str: S) -> Self {
        match str.as_ref().trim() {
            "1-0" => Self::FirstWins,
            "1 - 0" => Self::FirstWins,
            "1/2-1/2" => Self::Draw,
            "1/2 - 1/2" => Self::Draw,
            "½-½" => Self::Draw,
            "½ - ½" => Self::Draw,
            "0-1" => Self::SecondWins,
            "0 - 1" => Self::SecondWins,
            _ => Self::Unset,
        }
    }

    pub fn from_opt(result: Option<&str>) -> Self {
        result.map(Self::from_str).unwrap_or_default()
    }

    /// Tournament points earned by `side`. Anything not decisive is split.
    pub fn points(&self, side: Side) -> f64 {
        match (self, side) {
            (GameResult::FirstWins, Side::First) => 1.0,
            (GameResult::SecondWins, Side::Second) => 1.0,
            (GameResult::FirstWins, Side::Second) => 0.0,
            (GameResult::SecondWins, Side::First) => 0.0,
            (GameResult::Draw, _) | (GameResult::Unset, _) => 0.5,
        }
    }

    /// Outcome from the point of view of `side`, `None` when no result is known.
    pub fn outcome_for(&self, side: Side) -> Option<Outcome> {
        match (self, side) {
            (GameResult::FirstWins, Side::First) => Some(Outcome::Win),
            (GameResult::SecondWins, Side::Second) => Some(Outcome::Win),
            (GameResult::FirstWins, Side::Second) => Some(Outcome::Loss),
            (GameResult::SecondWins, Side::First) => Some(Outcome::Loss),
            (GameResult::Draw, _) => Some(Outcome::Draw),
            (GameResult::Unset, _) => None,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            GameResult::Unset => None,
            _ => Some(self.to_string()),
        }
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::FirstWins => write!(f, "1-0"),
            GameResult::SecondWins => write!(f, "0-1"),
            GameResult::Draw => write!(f, "1/2-1/2"),
            GameResult::Unset => write!(f, "*"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// First-mover plays white, second-mover black.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(&self) -> Self {
        match self {
            Side::First => Self::Second,
            Side::Second => Self::First,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub id: u32,
    pub first_id: u32,
    pub second_id: u32,
    pub tournament_id: Option<u32>,
    pub round: u32,
    pub result: GameResult,
    pub link: Option<String>,
}

impl Game {
    pub fn side_of(&self, player_id: u32) -> Option<Side> {
        if self.first_id == player_id {
            Some(Side::First)
        } else if self.second_id == player_id {
            Some(Side::Second)
        } else {
            None
        }
    }

    pub fn player_on(&self, side: Side) -> u32 {
        match side {
            Side::First => self.first_id,
            Side::Second => self.second_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_result_variants() {
        assert_eq!(GameResult::from_str("1-0"), GameResult::FirstWins);
        assert_eq!(GameResult::from_str(" 0 - 1 "), GameResult::SecondWins);
        assert_eq!(GameResult::from_str("½-½"), GameResult::Draw);
        assert_eq!(GameResult::from_str("*"), GameResult::Unset);
        assert_eq!(GameResult::from_opt(None), GameResult::Unset);
    }

    #[test]
    fn points_are_symmetric() {
        for result in [
            GameResult::FirstWins,
            GameResult::SecondWins,
            GameResult::Draw,
            GameResult::Unset,
        ] {
            assert_eq!(result.points(Side::First) + result.points(Side::Second), 1.0);
        }
    }

    #[test]
    fn outcome_follows_side() {
        assert_eq!(GameResult::FirstWins.outcome_for(Side::First), Some(Outcome::Win));
        assert_eq!(GameResult::FirstWins.outcome_for(Side::Second), Some(Outcome::Loss));
        assert_eq!(GameResult::SecondWins.outcome_for(Side::Second), Some(Outcome::Win));
        assert_eq!(GameResult::SecondWins.outcome_for(Side::First), Some(Outcome::Loss));
        assert_eq!(GameResult::Draw.outcome_for(Side::Second), Some(Outcome::Draw));
        assert_eq!(GameResult::Unset.outcome_for(Side::First), None);
    }

    #[test]
    fn finds_side_of_player() {
        let game = Game {
            id: 1,
            first_id: 4,
            second_id: 9,
            tournament_id: None,
            round: 1,
            result: GameResult::Unset,
            link: None,
        };
        assert_eq!(game.side_of(4), Some(Side::First));
        assert_eq!(game.side_of(9), Some(Side::Second));
        assert_eq!(game.side_of(5), None);
        assert_eq!(game.player_on(Side::First.other()), 9);
    }
}
