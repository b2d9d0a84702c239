//! # millionaire-quiz
//!
//! A "Who Wants to Be a Millionaire" style physics quiz for the terminal.
//!
//! The heart of the crate is [`QuestionBankParser`], which turns a loosely
//! formatted block of Arabic prose into [`Topic`]s of four-option
//! [`Question`]s. The rest is a thin terminal runner on top of it.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use millionaire_quiz::{AppOptions, Quiz, QuizError, Translator, data};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_text(
//!         data::SAMPLE_BANK,
//!         Translator::builtin(),
//!         AppOptions::default(),
//!     )?;
//!     quiz.run()
//! }
//! ```

mod app;
pub mod data;
mod models;
pub mod parser;
pub mod shuffle;
pub mod terminal;
pub mod translate;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

pub use app::{App, AppOptions, resolve_topic};
pub use data::LoadError;
pub use models::{AppState, Language, NUM_OPTIONS, Question, Topic};
pub use parser::{Grammar, GrammarError, QuestionBankParser, parse};
pub use translate::Translator;

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load quiz data: {0}")]
    Load(#[from] LoadError),

    #[error("invalid grammar: {0}")]
    Grammar(#[from] GrammarError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The bank parsed cleanly but held nothing playable.
    #[error("No questions found in the question bank.")]
    EmptyBank,
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Build a quiz from already parsed topics.
    pub fn new(
        topics: Vec<Topic>,
        translator: Translator,
        options: AppOptions,
    ) -> Result<Self, QuizError> {
        if topics.is_empty() {
            return Err(QuizError::EmptyBank);
        }
        Ok(Self {
            app: App::new(topics, translator, options),
        })
    }

    /// Parse `bank` with the built-in grammar and build a quiz from it.
    pub fn from_text(
        bank: &str,
        translator: Translator,
        options: AppOptions,
    ) -> Result<Self, QuizError> {
        Self::new(parse(bank), translator, options)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut session = terminal::TerminalSession::start()?;
        run_event_loop(&mut session, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    info!(state = ?app.state, "quiz closed");
    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return true;
    }

    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::LanguageSelect => handle_list_input(app, key, App::choose_language),
        AppState::TopicSelect => handle_list_input(app, key, App::choose_topic),
        AppState::Quiz => handle_quiz_input(app, key),
        AppState::Feedback => handle_feedback_input(app, key),
        AppState::Result => handle_result_input(app, key),
    }
    false
}

fn handle_welcome_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.dismiss_welcome();
    }
}

fn handle_list_input(app: &mut App, key: KeyCode, choose: fn(&mut App)) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Char(digit @ '1'..='9') => {
            app.select_index(digit as usize - '1' as usize);
        }
        KeyCode::Enter => choose(app),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Char(digit @ '1'..='4') => {
            app.select_index(digit as usize - '1' as usize);
        }
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer(),
        _ => {}
    }
}

fn handle_feedback_input(app: &mut App, key: KeyCode) {
    if matches!(key, KeyCode::Enter | KeyCode::Char(' ')) {
        app.next_question();
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz {
        Quiz::from_text(
            data::SAMPLE_BANK,
            Translator::builtin(),
            AppOptions {
                seed: Some(5),
                ..AppOptions::default()
            },
        )
        .unwrap()
    }

    #[test]
    fn empty_bank_is_rejected() {
        let result = Quiz::from_text(
            "no topics here",
            Translator::default(),
            AppOptions::default(),
        );
        assert!(matches!(result, Err(QuizError::EmptyBank)));
    }

    #[test]
    fn keys_drive_a_full_round() {
        let mut quiz = quiz();
        let app = quiz.app_mut();

        assert!(!handle_input(app, KeyCode::Enter));
        assert_eq!(app.state, AppState::LanguageSelect);
        handle_input(app, KeyCode::Char('2'));
        handle_input(app, KeyCode::Enter);
        assert_eq!(app.language(), Language::English);
        assert_eq!(app.state, AppState::TopicSelect);

        handle_input(app, KeyCode::Char('2'));
        handle_input(app, KeyCode::Enter);
        assert_eq!(app.current_topic().unwrap().name(), "الضوء");

        let correct = app.current_question().unwrap().correct_index();
        let key = char::from_digit(correct as u32 + 1, 10).unwrap();
        handle_input(app, KeyCode::Char(key));
        handle_input(app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Feedback);
        handle_input(app, KeyCode::Enter);

        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.calculate_score(), 1);

        handle_input(app, KeyCode::Char('r'));
        assert_eq!(app.state, AppState::TopicSelect);
    }

    #[test]
    fn q_quits_from_any_screen() {
        let mut quiz = quiz();
        assert!(handle_input(quiz.app_mut(), KeyCode::Char('q')));
    }
}
