use serde::Serialize;

/// Every question in a bank carries exactly this many options.
pub const NUM_OPTIONS: usize = 4;

/// A multiple-choice question with its correct option already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: [String; NUM_OPTIONS],
    correct_index: usize,
}

impl Question {
    pub(crate) fn new(prompt: String, options: [String; NUM_OPTIONS], correct_index: usize) -> Self {
        debug_assert!(correct_index < NUM_OPTIONS);
        Self {
            prompt,
            options,
            correct_index,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String; NUM_OPTIONS] {
        &self.options
    }

    /// Index into [`Question::options`] of the right answer, always in `0..4`.
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_correct(&self, answer: usize) -> bool {
        answer == self.correct_index
    }
}
