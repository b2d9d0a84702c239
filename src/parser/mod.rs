//! Question bank parser.
//!
//! Parsing is two passes over the raw text: the text is first cut into topic
//! segments at every topic marker, then each topic body is cut into question
//! blocks at every numbered question line. Anything that does not have the
//! expected shape is dropped rather than reported, so hand-edited banks with
//! stray prose or half-written questions still yield whatever is playable.

mod grammar;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{NUM_OPTIONS, Question, Topic};

pub use grammar::{Grammar, GrammarError};

static DEFAULT_PARSER: LazyLock<QuestionBankParser> = LazyLock::new(|| {
    QuestionBankParser::new(Grammar::arabic()).expect("built-in grammar compiles")
});

/// Parse `raw` with the built-in Arabic grammar.
pub fn parse(raw: &str) -> Vec<Topic> {
    DEFAULT_PARSER.parse(raw)
}

/// Extracts topics and questions from loosely formatted text.
///
/// Holds only compiled patterns, so one parser can be shared freely and
/// reused for any number of inputs.
#[derive(Debug, Clone)]
pub struct QuestionBankParser {
    grammar: Grammar,
    header: Regex,
    question_marker: Regex,
    question_block: Regex,
    answer_tag: Regex,
}

impl QuestionBankParser {
    pub fn new(grammar: Grammar) -> Result<Self, GrammarError> {
        grammar.validate()?;

        let header = Regex::new(&format!(
            r"\A{marker}[^\n]*?{separator}[ \t]*([^\n]*?){terminator}",
            marker = regex::escape(&grammar.topic_marker),
            separator = regex::escape(&grammar.title_separator),
            terminator = regex::escape(&grammar.title_terminator),
        ))?;

        let question_marker = Regex::new(&format!(
            r"(?m)^[ \t]*\d+\.[ \t]*{keyword}",
            keyword = regex::escape(&grammar.question_keyword),
        ))?;

        // Prompts may wrap; each option is exactly one line.
        let [a, b, c, d] = grammar.option_labels.each_ref().map(|label| regex::escape(label));
        let question_block = Regex::new(&format!(
            r"(?s)\A[ \t]*(.*?)\n\s*{a}[ \t]*([^\n]*)\n\s*{b}[ \t]*([^\n]*)\n\s*{c}[ \t]*([^\n]*)\n\s*{d}[ \t]*([^\n]*)"
        ))?;

        let tag = regex::escape(&grammar.answer_tag);
        let answer_tag = Regex::new(&format!(
            r"\s*(?:\([^()]*?{tag}[^()]*?\)|\[[^\[\]]*?{tag}[^\[\]]*?\]|{tag})"
        ))?;

        Ok(Self {
            grammar,
            header,
            question_marker,
            question_block,
            answer_tag,
        })
    }

    /// Parse a whole bank. Topics and questions keep their source order;
    /// an empty result means the text held nothing playable.
    pub fn parse(&self, raw: &str) -> Vec<Topic> {
        let starts: Vec<usize> = raw
            .match_indices(self.grammar.topic_marker.as_str())
            .map(|(index, _)| index)
            .collect();

        let topics: Vec<Topic> = starts
            .iter()
            .enumerate()
            .filter_map(|(n, &start)| {
                let end = starts.get(n + 1).copied().unwrap_or(raw.len());
                self.parse_topic(&raw[start..end])
            })
            .collect();

        debug!(
            headers = starts.len(),
            topics = topics.len(),
            "parsed question bank"
        );
        topics
    }

    fn parse_topic(&self, segment: &str) -> Option<Topic> {
        let Some(captures) = self.header.captures(segment) else {
            debug!("skipping topic header without a terminated title");
            return None;
        };
        let name = captures.get(1).map_or("", |m| m.as_str()).trim();
        if name.is_empty() {
            debug!("skipping topic with an empty title");
            return None;
        }

        let body_start = captures.get(0).map_or(segment.len(), |m| m.end());
        let questions = self.parse_questions(&segment[body_start..]);
        if questions.is_empty() {
            debug!(topic = name, "dropping topic without playable questions");
            return None;
        }

        Some(Topic::new(name.to_string(), questions))
    }

    fn parse_questions(&self, body: &str) -> Vec<Question> {
        let markers: Vec<_> = self.question_marker.find_iter(body).collect();

        markers
            .iter()
            .enumerate()
            .filter_map(|(n, marker)| {
                let end = markers.get(n + 1).map_or(body.len(), |next| next.start());
                self.parse_question(&body[marker.end()..end])
            })
            .collect()
    }

    fn parse_question(&self, block: &str) -> Option<Question> {
        let Some(captures) = self.question_block.captures(block) else {
            debug!("skipping question block without four labelled options");
            return None;
        };

        let prompt = captures.get(1).map_or("", |m| m.as_str()).trim();
        if prompt.is_empty() {
            debug!("skipping question with an empty prompt");
            return None;
        }

        let mut correct_index = None;
        let options: [String; NUM_OPTIONS] = std::array::from_fn(|index| {
            let raw = captures.get(index + 2).map_or("", |m| m.as_str());
            if raw.contains(self.grammar.answer_tag.as_str()) {
                // First marked option wins; later marks are only stripped.
                correct_index.get_or_insert(index);
                self.answer_tag.replace_all(raw, "").trim().to_string()
            } else {
                raw.trim().to_string()
            }
        });

        let Some(correct_index) = correct_index else {
            debug!(prompt, "dropping question without a correct-answer marker");
            return None;
        };

        Some(Question::new(prompt.to_string(), options, correct_index))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn topic(name: &str, questions: &str) -> String {
        format!("**عنوان الموضوع الأول: {name}**\n{questions}")
    }

    fn question(number: u32, prompt: &str, options: [&str; 4]) -> String {
        format!(
            "{number}. السؤال: {prompt}\n    أ) {}\n    ب) {}\n    ج) {}\n    د) {}\n",
            options[0], options[1], options[2], options[3]
        )
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse("").is_empty());
    }

    #[test]
    fn text_without_headers_yields_nothing() {
        let body = question(1, "س", ["a (الإجابة الصحيحة)", "b", "c", "d"]);
        assert!(parse(&body).is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn marker_position_sets_correct_index(#[case] marked: usize) {
        let mut options = ["w", "x", "y", "z"].map(String::from);
        options[marked].push_str(" (الإجابة الصحيحة)");
        let options = options.each_ref().map(String::as_str);

        let topics = parse(&topic("موضوع", &question(1, "سؤال؟", options)));

        let question = &topics[0].questions()[0];
        assert_eq!(question.correct_index(), marked);
        assert_eq!(question.options(), &["w", "x", "y", "z"].map(String::from));
    }

    #[test]
    fn first_marked_option_wins() {
        let text = topic(
            "موضوع",
            &question(
                1,
                "سؤال؟",
                ["a", "b (الإجابة الصحيحة)", "c", "d (الإجابة الصحيحة)"],
            ),
        );
        let topics = parse(&text);
        let question = &topics[0].questions()[0];
        assert_eq!(question.correct_index(), 1);
        assert_eq!(question.options()[3], "d");
    }

    #[test]
    fn unmarked_question_is_dropped_but_siblings_survive() {
        let body = format!(
            "{}{}",
            question(1, "بدون علامة", ["a", "b", "c", "d"]),
            question(2, "مع علامة", ["a", "b", "c (الإجابة الصحيحة)", "d"]),
        );
        let topics = parse(&topic("موضوع", &body));
        assert_eq!(topics[0].questions().len(), 1);
        assert_eq!(topics[0].questions()[0].prompt(), "مع علامة");
    }

    #[test]
    fn topic_with_only_unmarked_questions_is_absent() {
        let text = format!(
            "{}{}",
            topic("فارغ", &question(1, "س", ["a", "b", "c", "d"])),
            topic("ممتلئ", &question(1, "س", ["a (الإجابة الصحيحة)", "b", "c", "d"])),
        );
        let topics = parse(&text);
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].name(), "ممتلئ");
    }

    #[test]
    fn block_missing_an_option_is_skipped() {
        let broken = "1. السؤال: ناقص\n    أ) a (الإجابة الصحيحة)\n    ب) b\n    د) d\n";
        let body = format!(
            "{broken}{}",
            question(2, "كامل", ["a", "b (الإجابة الصحيحة)", "c", "d"])
        );
        let topics = parse(&topic("موضوع", &body));
        assert_eq!(topics[0].questions().len(), 1);
        assert_eq!(topics[0].questions()[0].prompt(), "كامل");
    }

    #[test]
    fn options_out_of_order_are_skipped() {
        let swapped = "1. السؤال: مقلوب\n    ب) b (الإجابة الصحيحة)\n    أ) a\n    ج) c\n    د) d\n";
        assert!(parse(&topic("موضوع", swapped)).is_empty());
    }

    #[test]
    fn bracketed_and_bare_tags_are_stripped() {
        let text = topic(
            "موضوع",
            &question(
                1,
                "سؤال؟",
                ["a [الإجابة الصحيحة]", "b الإجابة الصحيحة", "c", "d"],
            ),
        );
        let topics = parse(&text);
        let question = &topics[0].questions()[0];
        assert_eq!(question.correct_index(), 0);
        assert_eq!(question.options()[0], "a");
        assert_eq!(question.options()[1], "b");
    }

    #[rstest]
    #[case("3. ملاحظة خارجية\n")]
    #[case("\nملاحظة: راجع الدرس\n")]
    fn trailing_prose_is_not_part_of_last_option(#[case] trailer: &str) {
        let body = format!(
            "{}{trailer}",
            question(1, "سؤال؟", ["a", "b", "c", "d (الإجابة الصحيحة)"])
        );
        let topics = parse(&topic("موضوع", &body));
        let question = &topics[0].questions()[0];
        assert_eq!(question.options(), &["a", "b", "c", "d"].map(String::from));
    }

    #[test]
    fn misnumbered_block_cannot_mark_the_question_before_it() {
        let body = format!(
            "{}\n2- السؤال: ترقيم خاطئ\n    أ) x (الإجابة الصحيحة)\n    ب) y\n    ج) z\n    د) w\n",
            question(1, "بدون علامة", ["a", "b", "c", "d"])
        );
        assert!(parse(&topic("موضوع", &body)).is_empty());
    }

    #[test]
    fn marker_after_the_fourth_option_line_is_ignored() {
        let body = format!(
            "{}ملاحظة (الإجابة الصحيحة)\n",
            question(1, "بدون علامة", ["a", "b", "c", "d"])
        );
        assert!(parse(&topic("موضوع", &body)).is_empty());
    }

    #[test]
    fn header_without_terminator_is_skipped() {
        let text = format!(
            "**عنوان الموضوع الأول: بلا نهاية\n{}",
            question(1, "س", ["a (الإجابة الصحيحة)", "b", "c", "d"])
        );
        assert!(parse(&text).is_empty());
    }

    #[test]
    fn blank_title_is_skipped() {
        let text = format!(
            "**عنوان الموضوع:   **\n{}",
            question(1, "س", ["a (الإجابة الصحيحة)", "b", "c", "d"])
        );
        assert!(parse(&text).is_empty());
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let text = topic(
            "موضوع",
            &question(1, "سؤال؟", ["a", "b (الإجابة الصحيحة)", "c", "d"]),
        )
        .replace('\n', "\r\n");
        let topics = parse(&text);
        let question = &topics[0].questions()[0];
        assert_eq!(question.prompt(), "سؤال؟");
        assert_eq!(question.options()[1], "b");
        assert_eq!(question.options()[3], "d");
    }

    #[test]
    fn custom_grammar_is_honoured() {
        let parser = QuestionBankParser::new(Grammar::english()).unwrap();
        let text = "\
**Topic 1: Optics**
1. Question: Why is the sky blue?
   A) Reflection
   B) Rayleigh scattering (Correct answer)
   C) Refraction
   D) Diffraction
";
        let topics = parser.parse(text);
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].name(), "Optics");
        assert_eq!(topics[0].questions()[0].correct_option(), "Rayleigh scattering");
    }

    #[test]
    fn invalid_grammar_is_rejected() {
        let grammar = Grammar {
            topic_marker: String::new(),
            ..Grammar::arabic()
        };
        assert!(matches!(
            QuestionBankParser::new(grammar),
            Err(GrammarError::EmptyMarker("topic_marker"))
        ));
    }
}
