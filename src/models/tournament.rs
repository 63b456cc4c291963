use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Place {
    Champion,
    RunnerUp,
    SecondRunnerUp,
}

impl Place {
    pub fn from_rank(rank: u32) -> Option<Self> {
        match rank {
            1 => Some(Self::Champion),
            2 => Some(Self::RunnerUp),
            3 => Some(Self::SecondRunnerUp),
            _ => None,
        }
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Place::Champion => write!(f, "Champion"),
            Place::RunnerUp => write!(f, "Runner-up"),
            Place::SecondRunnerUp => write!(f, "Second runner-up"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub player_id: u32,
    pub place: Place,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tournament {
    pub id: u32,
    pub name: String,
    pub currently_active: bool,
    pub placements: Vec<Placement>,
}

impl Tournament {
    pub fn achievement_for(&self, player_id: u32, place: Place) -> Option<String> {
        self.placements
            .iter()
            .any(|p| p.player_id == player_id && p.place == place)
            .then(|| format!("{} of {}", place, self.name))
    }
}
