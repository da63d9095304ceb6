use serde::Serialize;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionProgress {
    pub total: usize,
    pub position: usize,
    pub remaining: usize,
    pub is_finished: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn from_session(session: &super::QuizSession) -> Self {
        let total = session.total_questions();
        let position = session.current_index();
        Self {
            total,
            position,
            remaining: total.saturating_sub(position),
            is_finished: session.is_finished(),
        }
    }
}
