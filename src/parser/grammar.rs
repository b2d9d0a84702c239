//! Marker vocabulary of a question bank.
//!
//! The parser never hardcodes any marker: everything it scans for comes from
//! a [`Grammar`], so banks written with a different vocabulary (or synthetic
//! ones in tests) parse through the same code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::NUM_OPTIONS;

/// Errors raised while turning a [`Grammar`] into a parser.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("grammar marker `{0}` must not be empty")]
    EmptyMarker(&'static str),

    #[error("grammar produced an invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Literal markers that delimit topics, questions, options and the answer tag.
///
/// A bank in the default grammar looks like:
///
/// ```text
/// **عنوان الموضوع الأول: الحركة الموجية**
/// 1. السؤال: ما هي الظاهرة ...؟
///     أ) انعكاس
///     ب) انكسار (الإجابة الصحيحة)
///     ج) حيود
///     د) تداخل
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grammar {
    /// Opens a topic header, e.g. `**عنوان الموضوع`.
    pub topic_marker: String,
    /// Separates the header prefix from the topic title.
    pub title_separator: String,
    /// Closes the topic header.
    pub title_terminator: String,
    /// Follows the `<n>.` numbering of a question line.
    pub question_keyword: String,
    /// Option labels in the order they must appear.
    pub option_labels: [String; NUM_OPTIONS],
    /// Tag embedded in the text of the correct option.
    pub answer_tag: String,
}

impl Grammar {
    /// The grammar the bundled question bank is written in.
    pub fn arabic() -> Self {
        Self {
            topic_marker: "**عنوان الموضوع".to_string(),
            title_separator: ":".to_string(),
            title_terminator: "**".to_string(),
            question_keyword: "السؤال:".to_string(),
            option_labels: ["أ)", "ب)", "ج)", "د)"].map(String::from),
            answer_tag: "الإجابة الصحيحة".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            topic_marker: "**Topic".to_string(),
            title_separator: ":".to_string(),
            title_terminator: "**".to_string(),
            question_keyword: "Question:".to_string(),
            option_labels: ["A)", "B)", "C)", "D)"].map(String::from),
            answer_tag: "Correct answer".to_string(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), GrammarError> {
        let required = [
            ("topic_marker", &self.topic_marker),
            ("title_separator", &self.title_separator),
            ("title_terminator", &self.title_terminator),
            ("question_keyword", &self.question_keyword),
            ("answer_tag", &self.answer_tag),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(GrammarError::EmptyMarker(name));
            }
        }
        if self.option_labels.iter().any(|label| label.trim().is_empty()) {
            return Err(GrammarError::EmptyMarker("option_labels"));
        }
        Ok(())
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::arabic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        assert!(Grammar::arabic().validate().is_ok());
        assert!(Grammar::english().validate().is_ok());
    }

    #[test]
    fn rejects_blank_answer_tag() {
        let grammar = Grammar {
            answer_tag: "  ".to_string(),
            ..Grammar::english()
        };
        assert!(matches!(
            grammar.validate(),
            Err(GrammarError::EmptyMarker("answer_tag"))
        ));
    }

    #[test]
    fn rejects_blank_option_label() {
        let mut grammar = Grammar::arabic();
        grammar.option_labels[2] = String::new();
        assert!(matches!(
            grammar.validate(),
            Err(GrammarError::EmptyMarker("option_labels"))
        ));
    }

    #[test]
    fn partial_json_falls_back_to_arabic_defaults() {
        let grammar: Grammar = serde_json::from_str(r#"{ "answer_tag": "صح" }"#).unwrap();
        assert_eq!(grammar.answer_tag, "صح");
        assert_eq!(grammar.topic_marker, Grammar::arabic().topic_marker);
    }
}
