use serde::{Deserialize, Serialize};

/// How a session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Single player scored against one counter.
    Solo,
    /// Two players scored independently, with a winner computed at the end.
    Duel,
}

impl Mode {
    #[must_use]
    pub fn is_duel(self) -> bool {
        matches!(self, Mode::Duel)
    }
}

/// Which player an answer submission is credited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

/// Outcome of a completed duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    PlayerOne,
    PlayerTwo,
    Tie,
}

impl Winner {
    /// Decide a duel from the two correct-answer counts.
    #[must_use]
    pub fn from_scores(player_one: u32, player_two: u32) -> Self {
        match player_one.cmp(&player_two) {
            std::cmp::Ordering::Greater => Winner::PlayerOne,
            std::cmp::Ordering::Less => Winner::PlayerTwo,
            std::cmp::Ordering::Equal => Winner::Tie,
        }
    }
}
