mod progress;
mod service;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::QuizProgress;
pub use service::{DEFAULT_FEEDBACK_DELAY, QuizSession, Submission};
