#![forbid(unsafe_code)]

pub mod audio;
pub mod error;
pub mod generator;
pub mod language;
pub mod session;

pub use quiz_core::Clock;

pub use audio::{AudioError, AudioPlayer, NullAudio, SoundId};
pub use error::LanguageServiceError;
pub use language::LanguageService;
pub use session::{
    AnswerOutcome, DEFAULT_QUESTION_COUNT, QuizLoopService, QuizSession, SessionAnswerResult,
    SessionPhase, SessionProgress, SessionSnapshot,
};
