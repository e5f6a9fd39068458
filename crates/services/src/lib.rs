#![forbid(unsafe_code)]

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{DEFAULT_FEEDBACK_DELAY, QuizProgress, QuizSession, Submission};
