mod quiz_vm;

pub use quiz_vm::{FeedbackVm, QuizVm, start_quiz};
