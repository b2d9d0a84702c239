use tracing::{debug, warn};

use crate::models::{AppState, Language, NUM_OPTIONS, Question, Topic};
use crate::shuffle::Shuffler;
use crate::translate::Translator;

/// Startup choices, normally taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    pub language: Option<Language>,
    /// Topic number (1-based), Arabic name or English name.
    pub topic: Option<String>,
    pub skip_welcome: bool,
    pub seed: Option<u64>,
}

/// Quiz runner state. Holds no terminal handles; rendering and input live elsewhere.
pub struct App {
    pub state: AppState,
    topics: Vec<Topic>,
    translator: Translator,
    language: Language,
    preset_language: bool,
    pending_topic: Option<String>,
    topic_not_found: bool,
    shuffler: Shuffler,
    language_cursor: usize,
    topic_cursor: usize,
    topic_index: usize,
    order: Vec<usize>,
    current: usize,
    selected_option: usize,
    answers: Vec<Option<usize>>,
    result_scroll: usize,
}

impl App {
    /// `topics` must not be empty; [`crate::Quiz`] checks this before building an app.
    pub fn new(topics: Vec<Topic>, translator: Translator, options: AppOptions) -> Self {
        let shuffler = options
            .seed
            .map_or_else(Shuffler::from_clock, Shuffler::seeded);

        let mut app = Self {
            state: AppState::Welcome,
            topics,
            translator,
            language: options.language.unwrap_or(Language::Arabic),
            preset_language: options.language.is_some(),
            pending_topic: options.topic,
            topic_not_found: false,
            shuffler,
            language_cursor: 0,
            topic_cursor: 0,
            topic_index: 0,
            order: Vec::new(),
            current: 0,
            selected_option: 0,
            answers: Vec::new(),
            result_scroll: 0,
        };

        if options.skip_welcome {
            app.dismiss_welcome();
        }
        app
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Bank text as it should be shown in the chosen language.
    pub fn display<'a>(&'a self, text: &'a str) -> &'a str {
        match self.language {
            Language::Arabic => text,
            Language::English => self.translator.translate(text),
        }
    }

    /// True when a `--topic` preselection did not match any topic.
    pub fn topic_not_found(&self) -> bool {
        self.topic_not_found
    }

    pub fn language_cursor(&self) -> usize {
        self.language_cursor
    }

    pub fn topic_cursor(&self) -> usize {
        self.topic_cursor
    }

    pub fn current_topic(&self) -> Option<&Topic> {
        self.topics.get(self.topic_index)
    }

    /// The question on screen; `None` outside the quiz and feedback screens.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            AppState::Quiz | AppState::Feedback => self.question_at(self.current),
            _ => None,
        }
    }

    fn question_at(&self, position: usize) -> Option<&Question> {
        let index = *self.order.get(position)?;
        self.current_topic()?.questions().get(index)
    }

    pub fn current_question_number(&self) -> usize {
        self.current + 1
    }

    pub fn total_questions(&self) -> usize {
        self.order.len()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    /// Questions of the running topic in the order they are asked.
    pub fn asked_questions(&self) -> impl Iterator<Item = &Question> {
        (0..self.order.len()).filter_map(|position| self.question_at(position))
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn last_answer_correct(&self) -> bool {
        self.answers
            .get(self.current)
            .copied()
            .flatten()
            .zip(self.current_question())
            .is_some_and(|(answer, question)| question.is_correct(answer))
    }

    pub fn dismiss_welcome(&mut self) {
        if self.preset_language {
            self.enter_topic_select();
        } else {
            self.state = AppState::LanguageSelect;
        }
    }

    pub fn move_cursor_down(&mut self) {
        match self.state {
            AppState::LanguageSelect => {
                self.language_cursor = (self.language_cursor + 1) % Language::ALL.len();
            }
            AppState::TopicSelect => {
                self.topic_cursor = (self.topic_cursor + 1) % self.topics.len().max(1);
            }
            AppState::Quiz => {
                self.selected_option = (self.selected_option + 1) % NUM_OPTIONS;
            }
            AppState::Result => self.result_scroll += 1,
            AppState::Welcome | AppState::Feedback => {}
        }
    }

    pub fn move_cursor_up(&mut self) {
        match self.state {
            AppState::LanguageSelect => {
                let len = Language::ALL.len();
                self.language_cursor = (self.language_cursor + len - 1) % len;
            }
            AppState::TopicSelect => {
                let len = self.topics.len().max(1);
                self.topic_cursor = (self.topic_cursor + len - 1) % len;
            }
            AppState::Quiz => {
                self.selected_option = (self.selected_option + NUM_OPTIONS - 1) % NUM_OPTIONS;
            }
            AppState::Result => self.result_scroll = self.result_scroll.saturating_sub(1),
            AppState::Welcome | AppState::Feedback => {}
        }
    }

    /// Jump straight to an entry by its 0-based index. Out of range is ignored.
    pub fn select_index(&mut self, index: usize) {
        match self.state {
            AppState::LanguageSelect if index < Language::ALL.len() => {
                self.language_cursor = index;
            }
            AppState::TopicSelect if index < self.topics.len() => self.topic_cursor = index,
            AppState::Quiz if index < NUM_OPTIONS => self.selected_option = index,
            _ => {}
        }
    }

    pub fn choose_language(&mut self) {
        self.language = Language::ALL[self.language_cursor];
        debug!(language = ?self.language, "language chosen");
        self.enter_topic_select();
    }

    fn enter_topic_select(&mut self) {
        self.state = AppState::TopicSelect;

        if let Some(identifier) = self.pending_topic.take() {
            match resolve_topic(&self.topics, &self.translator, &identifier) {
                Some(index) => self.start_topic(index),
                None => {
                    warn!(topic = %identifier, "preselected topic not found");
                    self.topic_not_found = true;
                }
            }
        }
    }

    pub fn choose_topic(&mut self) {
        self.start_topic(self.topic_cursor);
    }

    fn start_topic(&mut self, index: usize) {
        let Some(topic) = self.topics.get(index) else {
            return;
        };
        let count = topic.questions().len();

        self.topic_index = index;
        self.topic_cursor = index;
        self.topic_not_found = false;
        self.order = self.shuffler.order(count);
        self.answers = vec![None; count];
        self.current = 0;
        self.selected_option = 0;
        self.result_scroll = 0;
        self.state = AppState::Quiz;
        debug!(topic = topic.name(), questions = count, "topic started");
    }

    pub fn submit_answer(&mut self) {
        if self.state != AppState::Quiz {
            return;
        }
        if let Some(answer) = self.answers.get_mut(self.current) {
            *answer = Some(self.selected_option);
            self.state = AppState::Feedback;
        }
    }

    pub fn next_question(&mut self) {
        if self.state != AppState::Feedback {
            return;
        }
        self.current += 1;
        self.selected_option = 0;

        if self.current >= self.order.len() {
            self.current = self.order.len().saturating_sub(1);
            self.state = AppState::Result;
        } else {
            self.state = AppState::Quiz;
        }
    }

    pub fn calculate_score(&self) -> usize {
        self.answers
            .iter()
            .zip(self.asked_questions())
            .filter(|(answer, question)| answer.is_some_and(|answer| question.is_correct(answer)))
            .count()
    }

    /// Back to the topic list for another round.
    pub fn restart(&mut self) {
        self.state = AppState::TopicSelect;
        self.order.clear();
        self.answers.clear();
        self.current = 0;
        self.selected_option = 0;
        self.result_scroll = 0;
    }
}

/// Match `identifier` against a 1-based topic number or a topic name in either
/// language. Names compare trimmed and case-insensitively.
pub fn resolve_topic(topics: &[Topic], translator: &Translator, identifier: &str) -> Option<usize> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }

    if identifier.chars().all(|c| c.is_ascii_digit()) {
        let number: usize = identifier.parse().ok()?;
        return number.checked_sub(1).filter(|&index| index < topics.len());
    }

    let wanted = identifier.to_lowercase();
    topics.iter().position(|topic| {
        let arabic = topic.name().trim();
        let english = translator.translate(arabic);
        arabic.to_lowercase() == wanted || english.to_lowercase() == wanted
    })
}
