use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;

use muster_core::{Question, Roster};

use super::progress::QuizProgress;
use crate::error::SessionError;

/// Delay between showing grading feedback and the automatic advance to the
/// next question.
pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

/// Receipt for an accepted submission.
///
/// The caller owns the deferred transition: wait `delay`, then call
/// [`QuizSession::finish_feedback`] with `epoch`. A stale epoch (the session
/// was shuffled or reset in the meantime) makes that call a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub correct: bool,
    pub epoch: u64,
    pub delay: Duration,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session over a fixed question list.
///
/// Holds the ordered questions, the current position, the answer buffer for
/// the current question, and feedback flags. The phase is derived: the
/// session is active while no feedback is shown, in feedback after a submit,
/// and complete once the final question is answered correctly.
///
/// The session never blocks or spawns: the feedback delay is returned as
/// data in [`Submission`] and scheduled by the owner. An epoch counter
/// invalidates transitions scheduled before a shuffle or reset.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<String>,
    feedback_visible: bool,
    last_answer_correct: bool,
    progress_percent: f64,
    epoch: u64,
    feedback_delay: Duration,
}

impl QuizSession {
    /// Create a session over the given questions, starting at the first.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided; the
    /// session invariant `current < questions.len()` is established here and
    /// never rechecked.
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }

        let answers = vec![String::new(); questions[0].slot_count()];
        Ok(Self {
            questions,
            current: 0,
            answers,
            feedback_visible: false,
            last_answer_correct: false,
            progress_percent: 0.0,
            epoch: 0,
            feedback_delay: DEFAULT_FEEDBACK_DELAY,
        })
    }

    /// Build the question list from a roster and start a session over it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for an empty roster.
    pub fn from_roster(roster: &Roster) -> Result<Self, SessionError> {
        Self::new(roster.questions())
    }

    /// Override the feedback delay reported in submission receipts.
    #[must_use]
    pub fn with_feedback_delay(mut self, delay: Duration) -> Self {
        self.feedback_delay = delay;
        self
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    #[must_use]
    pub fn feedback_visible(&self) -> bool {
        self.feedback_visible
    }

    #[must_use]
    pub fn last_answer_correct(&self) -> bool {
        self.last_answer_correct
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }

    /// True while the buffer is editable and a submit would be accepted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.feedback_visible
    }

    /// The terminal condition: final question answered correctly, feedback
    /// on screen. Derived, not stored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.feedback_visible
            && self.last_answer_correct
            && self.current == self.questions.len() - 1
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.total_questions(),
            position: self.current,
            percent: self.progress_percent,
            is_complete: self.is_complete(),
        }
    }

    /// Replace one entry of the answer buffer.
    ///
    /// Ignored while feedback is shown (the buffer is locked) and for slot
    /// indexes past the buffer; an out-of-range slot is a caller bug, not a
    /// user-facing error.
    pub fn set_answer(&mut self, slot: usize, value: impl Into<String>) {
        if !self.is_active() {
            return;
        }
        if let Some(entry) = self.answers.get_mut(slot) {
            *entry = value.into();
        }
    }

    /// Grade the answer buffer and enter feedback.
    ///
    /// Returns `None` unless the session is active, which makes a re-entrant
    /// submit while feedback is pending a no-op instead of a corruption of
    /// the current index.
    pub fn submit(&mut self) -> Option<Submission> {
        if !self.is_active() {
            return None;
        }

        let correct = self
            .current_question()
            .is_correct(self.answers.iter().map(String::as_str));
        self.last_answer_correct = correct;
        self.feedback_visible = true;

        Some(Submission {
            correct,
            epoch: self.epoch,
            delay: self.feedback_delay,
        })
    }

    /// The deferred transition scheduled by a submit.
    ///
    /// Returns true when the session advanced to the next question. Returns
    /// false and changes nothing when `epoch` is stale, when no feedback is
    /// pending, or on the final question: a correct final answer leaves the
    /// terminal state on screen, and an incorrect one keeps the session in
    /// feedback until a shuffle or reset.
    pub fn finish_feedback(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || !self.feedback_visible {
            return false;
        }
        if self.current + 1 >= self.questions.len() {
            return false;
        }

        self.current += 1;
        self.resize_buffer();
        self.feedback_visible = false;
        self.progress_percent = percent_at(self.current, self.questions.len());
        true
    }

    /// Uniformly reorder the questions and restart from the first.
    ///
    /// Valid in any phase; any pending deferred transition is invalidated.
    pub fn shuffle(&mut self) {
        let mut rng = rand::rng();
        self.shuffle_with(&mut rng);
    }

    /// Shuffle with a caller-provided generator, for deterministic tests.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions.shuffle(rng);
        self.rewind();
    }

    /// Restart from the first question without reordering.
    ///
    /// Valid in any phase; any pending deferred transition is invalidated.
    pub fn reset(&mut self) {
        self.rewind();
    }

    fn rewind(&mut self) {
        self.current = 0;
        self.resize_buffer();
        self.feedback_visible = false;
        self.last_answer_correct = false;
        self.progress_percent = 0.0;
        self.epoch += 1;
    }

    fn resize_buffer(&mut self) {
        self.answers = vec![String::new(); self.current_question().slot_count()];
    }
}

fn percent_at(index: usize, total: usize) -> f64 {
    (index as f64 / total as f64) * 100.0
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
