use serde::Serialize;

use super::Question;

/// A named group of questions. Never empty once produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    name: String,
    questions: Vec<Question>,
}

impl Topic {
    pub(crate) fn new(name: String, questions: Vec<Question>) -> Self {
        Self { name, questions }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}
