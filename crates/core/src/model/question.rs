use std::collections::HashSet;

/// A single quiz question derived from one position group.
///
/// The correct answers keep roster order for display; grading treats them as
/// a set. The slot count equals the group size, so the UI renders one input
/// per expected name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    correct_answers: Vec<String>,
}

impl Question {
    #[must_use]
    pub fn new(position: &str, names: Vec<String>) -> Self {
        Self {
            prompt: format!("Who holds the position of {position}?"),
            correct_answers: names,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn correct_answers(&self) -> &[String] {
        &self.correct_answers
    }

    /// Number of answer inputs to present for this question.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.correct_answers.len()
    }

    /// Grade a submission against this question's answer set.
    ///
    /// Entries are trimmed and empty entries are discarded; duplicates
    /// collapse under set semantics. A submission is correct exactly when
    /// the resulting set equals the correct-answer set, so a missing name,
    /// an extra name, or a duplicated name all grade as incorrect.
    #[must_use]
    pub fn is_correct<'a, I>(&self, submitted: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let submitted: HashSet<&str> = submitted
            .into_iter()
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();
        let correct: HashSet<&str> = self.correct_answers.iter().map(String::as_str).collect();

        submitted == correct
    }
}
