use std::sync::Arc;

use quiz_core::model::{Mode, OperationFilter, PlayerSlot, Winner};

use crate::Clock;
use crate::audio::{AudioPlayer, SoundId};

use super::engine::{AnswerOutcome, QuizSession};
use super::progress::SessionProgress;
use super::view::SessionSnapshot;

/// Result of answering a single question through the loop service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionAnswerResult {
    pub outcome: AnswerOutcome,
    pub index: usize,
    pub is_finished: bool,
    pub winner: Option<Winner>,
}

/// Orchestrates session actions: stamps them with the clock and routes
/// feedback sounds to the audio port.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    audio: Arc<dyn AudioPlayer>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, audio: Arc<dyn AudioPlayer>) -> Self {
        Self { clock, audio }
    }

    /// Start a new session with a generated question sequence.
    #[must_use]
    pub fn start_session(&self, mode: Mode, filter: OperationFilter) -> QuizSession {
        let mut session = QuizSession::new();
        session.start(mode, filter, self.clock.now());
        session
    }

    /// Submit an answer and play the matching feedback clip.
    ///
    /// Ignored submissions stay silent. Playback failure is logged and
    /// dropped; it never affects the session.
    pub fn submit_answer(
        &self,
        session: &mut QuizSession,
        value: u32,
        player: PlayerSlot,
    ) -> SessionAnswerResult {
        let outcome = session.submit_answer(value, player, self.clock.now());

        match outcome {
            AnswerOutcome::Correct => self.play(SoundId::Clap),
            AnswerOutcome::Incorrect => self.play(SoundId::Aww),
            AnswerOutcome::Ignored => {}
        }

        SessionAnswerResult {
            outcome,
            index: session.current_index(),
            is_finished: session.is_finished(),
            winner: session.winner(),
        }
    }

    /// Skip the current question (solo sessions).
    pub fn skip(&self, session: &mut QuizSession) -> SessionProgress {
        session.skip(self.clock.now());
        SessionProgress::from_session(session)
    }

    /// Advance both players to the next question (duel sessions).
    pub fn advance_turn(&self, session: &mut QuizSession) -> SessionProgress {
        session.advance_turn(self.clock.now());
        SessionProgress::from_session(session)
    }

    /// Capture a presentation snapshot as of the service clock.
    #[must_use]
    pub fn snapshot(&self, session: &QuizSession) -> SessionSnapshot {
        SessionSnapshot::capture(session, self.clock.now())
    }

    fn play(&self, sound: SoundId) {
        if let Err(err) = self.audio.play(sound) {
            log::warn!("audio playback failed for {sound}: {err}");
        }
    }
}
