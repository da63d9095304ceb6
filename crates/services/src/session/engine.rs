use chrono::{DateTime, Utc};
use serde::Serialize;

use quiz_core::model::{Mode, OperationFilter, PlayerSlot, Question, SessionSummary, Winner};
use quiz_core::time::seconds_between;

use crate::generator;

/// Questions per session unless the caller asks otherwise.
pub const DEFAULT_QUESTION_COUNT: u32 = 20;

/// What a submission did to the session.
///
/// `Ignored` covers every guarded no-op: submitting while idle, after the
/// last question, or after the session finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    Ignored,
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionPhase {
    Idle,
    Running,
    Finished,
}

/// In-memory quiz session for one or two players.
///
/// Steps through a fixed question sequence, scoring submissions per player.
/// All timestamps come from the services layer clock; the session never
/// reads system time itself.
///
/// Advancement is asymmetric on purpose, matching the game it models:
/// a solo submission always advances to the next question, while a duel
/// advances only on an explicit [`advance_turn`](Self::advance_turn) so both
/// players can attempt the same question. Duel submissions are not
/// deduplicated per question; every call scores independently.
#[derive(Debug, Clone)]
pub struct QuizSession {
    mode: Mode,
    questions: Vec<Question>,
    current: usize,
    player_one_correct: u32,
    player_two_correct: u32,
    running: bool,
    finished: bool,
    started_at: Option<DateTime<Utc>>,
    frozen_elapsed: u64,
    winner: Option<Winner>,
}

impl QuizSession {
    /// Create an idle session with no questions.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Solo,
            questions: Vec::new(),
            current: 0,
            player_one_correct: 0,
            player_two_correct: 0,
            running: false,
            finished: false,
            started_at: None,
            frozen_elapsed: 0,
            winner: None,
        }
    }

    /// Start (or restart) a session with a freshly generated default-length
    /// question sequence.
    ///
    /// Valid from every phase; a running session is restarted and its old
    /// sequence discarded.
    pub fn start(&mut self, mode: Mode, filter: OperationFilter, now: DateTime<Utc>) {
        self.start_with_count(mode, filter, DEFAULT_QUESTION_COUNT, now);
    }

    /// Start with an explicit question count.
    pub fn start_with_count(
        &mut self,
        mode: Mode,
        filter: OperationFilter,
        count: u32,
        now: DateTime<Utc>,
    ) {
        let questions = generator::generate(count, filter, &mut rand::rng());
        self.start_with_questions(mode, questions, now);
    }

    /// Start with a caller-provided question sequence.
    ///
    /// An empty sequence finishes the session immediately; an empty duel is
    /// recorded as a 0-0 tie.
    pub fn start_with_questions(
        &mut self,
        mode: Mode,
        questions: Vec<Question>,
        now: DateTime<Utc>,
    ) {
        self.mode = mode;
        self.questions = questions;
        self.current = 0;
        self.player_one_correct = 0;
        self.player_two_correct = 0;
        self.running = true;
        self.finished = false;
        self.started_at = Some(now);
        self.frozen_elapsed = 0;
        self.winner = None;

        if self.questions.is_empty() {
            self.finish(now);
        }
    }

    /// Evaluate a submission against the current question.
    ///
    /// Correct answers score the effective player: solo always credits
    /// player one, a duel credits the given slot. Solo then advances to the
    /// next question whether or not the answer was right; a duel stays on
    /// the current question until [`advance_turn`](Self::advance_turn).
    ///
    /// Returns `AnswerOutcome::Ignored` without touching any state when the
    /// session is not running or the sequence is exhausted.
    pub fn submit_answer(
        &mut self,
        value: u32,
        player: PlayerSlot,
        now: DateTime<Utc>,
    ) -> AnswerOutcome {
        if !self.running {
            return AnswerOutcome::Ignored;
        }
        let Some(question) = self.questions.get(self.current) else {
            return AnswerOutcome::Ignored;
        };

        let correct = question.accepts(value);
        if correct {
            let slot = match self.mode {
                Mode::Solo => PlayerSlot::One,
                Mode::Duel => player,
            };
            match slot {
                PlayerSlot::One => self.player_one_correct += 1,
                PlayerSlot::Two => self.player_two_correct += 1,
            }
        }

        if self.mode == Mode::Solo {
            self.advance(now);
        }

        if correct {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    /// Move past the current question without scoring. Solo sessions only;
    /// a no-op otherwise.
    pub fn skip(&mut self, now: DateTime<Utc>) {
        if self.running && self.mode == Mode::Solo && self.current < self.questions.len() {
            self.advance(now);
        }
    }

    /// Move both duel players to the next question, regardless of how many
    /// submissions the current one received. Duel sessions only; a no-op
    /// otherwise.
    pub fn advance_turn(&mut self, now: DateTime<Utc>) {
        if self.running && self.mode == Mode::Duel && self.current < self.questions.len() {
            self.advance(now);
        }
    }

    fn advance(&mut self, now: DateTime<Utc>) {
        self.current += 1;
        if self.current >= self.questions.len() {
            self.finish(now);
        }
    }

    /// Stop the session: freeze the elapsed time and, in duel mode, decide
    /// the winner. The winner is decided here once and never recomputed;
    /// calling `finish` on a session that is not running is a no-op.
    pub fn finish(&mut self, now: DateTime<Utc>) {
        if !self.running {
            return;
        }
        self.frozen_elapsed = self.elapsed_seconds(now);
        self.running = false;
        self.finished = true;
        if self.mode.is_duel() {
            self.winner = Some(Winner::from_scores(
                self.player_one_correct,
                self.player_two_correct,
            ));
        }
    }

    /// Whole seconds since start: recomputed while running, frozen once
    /// finished, zero while idle.
    #[must_use]
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        if self.running {
            self.started_at
                .map(|started| seconds_between(started, now))
                .unwrap_or(0)
        } else {
            self.frozen_elapsed
        }
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.running {
            SessionPhase::Running
        } else if self.finished {
            SessionPhase::Finished
        } else {
            SessionPhase::Idle
        }
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Zero-based position in the sequence; equals the total once finished.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.running {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn player_one_correct(&self) -> u32 {
        self.player_one_correct
    }

    #[must_use]
    pub fn player_two_correct(&self) -> u32 {
        self.player_two_correct
    }

    /// Set at the finish transition of a duel; always `None` in solo mode.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    /// Aggregate result of a finished session; `None` until then.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        if !self.finished {
            return None;
        }
        let total = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        // Solo counters are bounded by the sequence length and duel counts
        // are accepted unbounded, so construction cannot fail from here.
        SessionSummary::from_scores(
            self.mode,
            total,
            self.player_one_correct,
            self.player_two_correct,
            self.frozen_elapsed,
        )
        .ok()
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::model::Operation;
    use quiz_core::time::fixed_now;

    fn question(a: u32, b: u32) -> Question {
        Question::new(a, b, Operation::Multiply).unwrap()
    }

    fn questions(n: usize) -> Vec<Question> {
        (0..n).map(|_| question(3, 4)).collect()
    }

    fn started(mode: Mode, n: usize) -> QuizSession {
        let mut session = QuizSession::new();
        session.start_with_questions(mode, questions(n), fixed_now());
        session
    }

    #[test]
    fn new_session_is_idle() {
        let session = QuizSession::new();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.elapsed_seconds(fixed_now()), 0);
        assert_eq!(session.current_question(), None);
    }

    #[test]
    fn start_resets_all_counters() {
        let mut session = started(Mode::Solo, 3);
        session.submit_answer(12, PlayerSlot::One, fixed_now());
        assert_eq!(session.player_one_correct(), 1);
        assert_eq!(session.current_index(), 1);

        session.start_with_questions(Mode::Solo, questions(3), fixed_now());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.player_one_correct(), 0);
        assert_eq!(session.player_two_correct(), 0);
        assert_eq!(session.elapsed_seconds(fixed_now()), 0);
        assert!(session.is_running());
        assert_eq!(session.winner(), None);
    }

    #[test]
    fn solo_correct_answer_scores_and_advances() {
        let mut session = started(Mode::Solo, 3);
        let outcome = session.submit_answer(12, PlayerSlot::One, fixed_now());

        assert_eq!(outcome, AnswerOutcome::Correct);
        assert_eq!(session.player_one_correct(), 1);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn solo_incorrect_answer_advances_without_scoring() {
        let mut session = started(Mode::Solo, 3);
        let outcome = session.submit_answer(11, PlayerSlot::One, fixed_now());

        assert_eq!(outcome, AnswerOutcome::Incorrect);
        assert_eq!(session.player_one_correct(), 0);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn solo_credits_player_one_whatever_slot_is_named() {
        let mut session = started(Mode::Solo, 3);
        session.submit_answer(12, PlayerSlot::Two, fixed_now());

        assert_eq!(session.player_one_correct(), 1);
        assert_eq!(session.player_two_correct(), 0);
    }

    #[test]
    fn duel_submission_never_advances() {
        let mut session = started(Mode::Duel, 3);

        session.submit_answer(12, PlayerSlot::One, fixed_now());
        session.submit_answer(12, PlayerSlot::Two, fixed_now());
        session.submit_answer(11, PlayerSlot::One, fixed_now());

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.player_one_correct(), 1);
        assert_eq!(session.player_two_correct(), 1);
    }

    #[test]
    fn duel_submissions_are_not_idempotent() {
        // Repeat submissions to the same question each score on their own;
        // only the explicit advance moves play forward.
        let mut session = started(Mode::Duel, 3);

        session.submit_answer(12, PlayerSlot::One, fixed_now());
        session.submit_answer(12, PlayerSlot::One, fixed_now());

        assert_eq!(session.player_one_correct(), 2);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_turn_moves_on_regardless_of_submissions() {
        let mut session = started(Mode::Duel, 3);

        session.advance_turn(fixed_now());
        assert_eq!(session.current_index(), 1);

        session.submit_answer(12, PlayerSlot::Two, fixed_now());
        session.advance_turn(fixed_now());
        assert_eq!(session.current_index(), 2);
    }

    #[test]
    fn skip_is_solo_only_and_advance_turn_is_duel_only() {
        let mut duel = started(Mode::Duel, 3);
        duel.skip(fixed_now());
        assert_eq!(duel.current_index(), 0);

        let mut solo = started(Mode::Solo, 3);
        solo.advance_turn(fixed_now());
        assert_eq!(solo.current_index(), 0);

        solo.skip(fixed_now());
        assert_eq!(solo.current_index(), 1);
        assert_eq!(solo.player_one_correct(), 0);
    }

    #[test]
    fn completing_solo_leaves_winner_unset() {
        let mut session = started(Mode::Solo, 2);
        session.submit_answer(12, PlayerSlot::One, fixed_now());
        session.submit_answer(12, PlayerSlot::One, fixed_now());

        assert!(session.is_finished());
        assert!(!session.is_running());
        assert_eq!(session.winner(), None);

        let summary = session.summary().unwrap();
        assert_eq!(summary.player_one_correct(), 2);
        assert_eq!(summary.winner(), None);
    }

    #[test]
    fn duel_winner_is_decided_from_scores() {
        let mut session = started(Mode::Duel, 20);
        for round in 0..20 {
            session.submit_answer(12, PlayerSlot::One, fixed_now());
            let p2_answer = if round < 8 { 12 } else { 11 };
            session.submit_answer(p2_answer, PlayerSlot::Two, fixed_now());
            session.advance_turn(fixed_now());
        }

        assert!(session.is_finished());
        assert_eq!(session.player_one_correct(), 20);
        assert_eq!(session.player_two_correct(), 8);
        assert_eq!(session.winner(), Some(Winner::PlayerOne));
    }

    #[test]
    fn even_duel_is_a_tie() {
        let mut session = started(Mode::Duel, 2);
        for _ in 0..2 {
            session.submit_answer(12, PlayerSlot::One, fixed_now());
            session.submit_answer(12, PlayerSlot::Two, fixed_now());
            session.advance_turn(fixed_now());
        }

        assert_eq!(session.winner(), Some(Winner::Tie));
    }

    #[test]
    fn stale_events_are_no_ops() {
        let mut idle = QuizSession::new();
        assert_eq!(
            idle.submit_answer(12, PlayerSlot::One, fixed_now()),
            AnswerOutcome::Ignored
        );
        idle.skip(fixed_now());
        idle.advance_turn(fixed_now());
        assert_eq!(idle.phase(), SessionPhase::Idle);

        let mut finished = started(Mode::Solo, 1);
        finished.submit_answer(12, PlayerSlot::One, fixed_now());
        assert!(finished.is_finished());

        assert_eq!(
            finished.submit_answer(12, PlayerSlot::One, fixed_now()),
            AnswerOutcome::Ignored
        );
        finished.skip(fixed_now());
        assert_eq!(finished.current_index(), 1);
        assert_eq!(finished.player_one_correct(), 1);
    }

    #[test]
    fn empty_sequence_finishes_immediately() {
        let mut solo = QuizSession::new();
        solo.start_with_questions(Mode::Solo, Vec::new(), fixed_now());
        assert!(solo.is_finished());
        assert_eq!(solo.winner(), None);

        let mut duel = QuizSession::new();
        duel.start_with_questions(Mode::Duel, Vec::new(), fixed_now());
        assert!(duel.is_finished());
        assert_eq!(duel.winner(), Some(Winner::Tie));
    }

    #[test]
    fn elapsed_time_runs_then_freezes() {
        let start = fixed_now();
        let mut session = QuizSession::new();
        session.start_with_questions(Mode::Solo, questions(2), start);

        assert_eq!(session.elapsed_seconds(start + Duration::seconds(5)), 5);

        session.submit_answer(12, PlayerSlot::One, start + Duration::seconds(6));
        session.submit_answer(12, PlayerSlot::One, start + Duration::seconds(7));
        assert!(session.is_finished());

        // A late tick re-reads the frozen value.
        assert_eq!(session.elapsed_seconds(start + Duration::seconds(120)), 7);
    }

    #[test]
    fn restart_returns_a_finished_session_to_running() {
        let mut session = started(Mode::Duel, 1);
        session.advance_turn(fixed_now());
        assert!(session.is_finished());
        assert_eq!(session.winner(), Some(Winner::Tie));

        session.start_with_questions(Mode::Solo, questions(2), fixed_now());
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.winner(), None);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn generated_start_uses_the_default_count() {
        let mut session = QuizSession::new();
        session.start(Mode::Solo, OperationFilter::Both, fixed_now());
        assert_eq!(session.total_questions(), DEFAULT_QUESTION_COUNT as usize);
        assert!(session.is_running());
    }

    #[test]
    fn solo_run_to_completion_over_twenty_questions() {
        let mut session = QuizSession::new();
        session.start_with_questions(Mode::Solo, questions(20), fixed_now());

        for expected_index in 1..=20 {
            session.submit_answer(12, PlayerSlot::One, fixed_now());
            assert_eq!(session.current_index(), expected_index);
        }

        assert!(!session.is_running());
        assert_eq!(session.player_one_correct(), 20);
    }
}
