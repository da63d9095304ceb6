mod engine;
mod progress;
mod view;
mod workflow;

// Public API of the session subsystem.
pub use engine::{AnswerOutcome, DEFAULT_QUESTION_COUNT, QuizSession, SessionPhase};
pub use progress::SessionProgress;
pub use view::SessionSnapshot;
pub use workflow::{QuizLoopService, SessionAnswerResult};
