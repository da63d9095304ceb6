use chrono::{DateTime, Utc};
use serde::Serialize;

use quiz_core::model::{Mode, Winner};

use super::engine::{QuizSession, SessionPhase};

/// Read-only snapshot of a session for the presentation layer.
///
/// This is intentionally **not** a UI view-model:
/// - no pre-formatted locale strings
/// - no styling or layout assumptions
///
/// The UI renders prompt text, scores and the timer from these fields as it
/// sees fit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub mode: Mode,
    /// Prompt text of the current question; `None` outside a running session.
    pub question: Option<String>,
    pub index: usize,
    pub total: usize,
    pub player_one_correct: u32,
    pub player_two_correct: u32,
    pub elapsed_seconds: u64,
    pub winner: Option<Winner>,
}

impl SessionSnapshot {
    /// Capture the session state as of `now`.
    #[must_use]
    pub fn capture(session: &QuizSession, now: DateTime<Utc>) -> Self {
        Self {
            phase: session.phase(),
            mode: session.mode(),
            question: session.current_question().map(|q| q.prompt()),
            index: session.current_index(),
            total: session.total_questions(),
            player_one_correct: session.player_one_correct(),
            player_two_correct: session.player_two_correct(),
            elapsed_seconds: session.elapsed_seconds(now),
            winner: session.winner(),
        }
    }
}
