use std::time::Duration;

use muster_core::Roster;
use services::{QuizSession, SessionError, Submission};

/// Feedback banner state after a graded submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
}

impl FeedbackVm {
    #[must_use]
    pub fn message(self) -> &'static str {
        if self.correct {
            "Correct!"
        } else {
            "Incorrect. Try again."
        }
    }
}

/// UI-shaped wrapper around a quiz session.
///
/// Keeps the view free of session bookkeeping: the view reads display
/// strings here and forwards user actions, including the deferred
/// feedback-advance it schedules from each accepted submission.
pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        self.session.current_question().prompt()
    }

    #[must_use]
    pub fn slots(&self) -> &[String] {
        self.session.answers()
    }

    /// "3 of 19" style counter for the progress row.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!(
            "{} of {}",
            self.session.current_index() + 1,
            self.session.total_questions()
        )
    }

    #[must_use]
    pub fn percent(&self) -> f64 {
        self.session.progress_percent()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<FeedbackVm> {
        self.session.feedback_visible().then(|| FeedbackVm {
            correct: self.session.last_answer_correct(),
        })
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    pub fn set_answer(&mut self, slot: usize, value: impl Into<String>) {
        self.session.set_answer(slot, value);
    }

    pub fn submit(&mut self) -> Option<Submission> {
        self.session.submit()
    }

    pub fn finish_feedback(&mut self, epoch: u64) -> bool {
        self.session.finish_feedback(epoch)
    }

    pub fn shuffle(&mut self) {
        self.session.shuffle();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }
}

/// # Errors
///
/// Returns `SessionError::Empty` when the roster derives no questions; the
/// view renders that case as its own screen instead of a session.
pub fn start_quiz(roster: &Roster, feedback_delay: Duration) -> Result<QuizVm, SessionError> {
    let session = QuizSession::from_roster(roster)?.with_feedback_delay(feedback_delay);
    Ok(QuizVm::new(session))
}

#[cfg(test)]
mod tests {
    use muster_core::PersonRecord;

    use super::*;

    fn build_roster() -> Roster {
        Roster::new(vec![
            PersonRecord::new("Hailey Lee", "OPSO").unwrap(),
            PersonRecord::new("Ivan Lee", "DCO").unwrap(),
        ])
    }

    #[test]
    fn empty_roster_is_surfaced_as_error() {
        let err = start_quiz(&Roster::default(), Duration::from_millis(100)).unwrap_err();
        assert_eq!(err, SessionError::Empty);
    }

    #[test]
    fn labels_track_the_session() {
        let mut vm = start_quiz(&build_roster(), Duration::from_millis(100)).unwrap();
        assert_eq!(vm.position_label(), "1 of 2");
        assert_eq!(vm.prompt(), "Who holds the position of OPSO?");
        assert!(vm.feedback().is_none());

        vm.set_answer(0, "Hailey Lee");
        let submission = vm.submit().unwrap();
        assert_eq!(vm.feedback().unwrap().message(), "Correct!");

        vm.finish_feedback(submission.epoch);
        assert_eq!(vm.position_label(), "2 of 2");
        assert_eq!(vm.percent(), 50.0);
    }

    #[test]
    fn incorrect_feedback_message() {
        let mut vm = start_quiz(&build_roster(), Duration::from_millis(100)).unwrap();
        vm.set_answer(0, "somebody else");
        vm.submit().unwrap();
        let feedback = vm.feedback().unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.message(), "Incorrect. Try again.");
    }
}
