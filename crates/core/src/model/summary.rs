use thiserror::Error;

use crate::model::{Mode, Winner};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("correct count ({count}) exceeds question total ({total})")]
    CountExceedsTotal { count: u32, total: u32 },
}

/// Aggregate result of a completed session.
///
/// The winner is decided exactly once, here, and only for duels; a solo
/// summary leaves it unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    mode: Mode,
    total_questions: u32,
    player_one_correct: u32,
    player_two_correct: u32,
    elapsed_seconds: u64,
    winner: Option<Winner>,
}

impl SessionSummary {
    /// Build a summary from the final counters of a session.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::CountExceedsTotal` for a solo summary
    /// whose correct count exceeds the number of questions asked: a solo
    /// submission always advances, so a higher count means the caller's
    /// bookkeeping is broken. Duel counters are unbounded — players may
    /// submit repeatedly on one question — and are accepted as-is.
    pub fn from_scores(
        mode: Mode,
        total_questions: u32,
        player_one_correct: u32,
        player_two_correct: u32,
        elapsed_seconds: u64,
    ) -> Result<Self, SessionSummaryError> {
        if !mode.is_duel() {
            for count in [player_one_correct, player_two_correct] {
                if count > total_questions {
                    return Err(SessionSummaryError::CountExceedsTotal {
                        count,
                        total: total_questions,
                    });
                }
            }
        }

        let winner = mode
            .is_duel()
            .then(|| Winner::from_scores(player_one_correct, player_two_correct));

        Ok(Self {
            mode,
            total_questions,
            player_one_correct,
            player_two_correct,
            elapsed_seconds,
            winner,
        })
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn player_one_correct(&self) -> u32 {
        self.player_one_correct
    }

    #[must_use]
    pub fn player_two_correct(&self) -> u32 {
        self.player_two_correct
    }

    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }
}
