mod feedback;
mod labels;
mod language;
mod quiz;
mod result;
mod topics;
mod welcome;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::AppState;

use labels::labels;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Welcome => welcome::render(frame, area),
        AppState::LanguageSelect => language::render(frame, area, app),
        AppState::TopicSelect => topics::render(frame, area, app),
        AppState::Quiz => quiz::render(frame, area, app),
        AppState::Feedback => feedback::render(frame, area, app),
        AppState::Result => result::render(frame, area, app),
    }
}

fn render_controls(frame: &mut Frame, area: Rect, controls: &str) {
    let widget = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

/// Cursor-highlighted line used by every selectable list.
fn list_line<'a>(label: String, text: &'a str, is_selected: bool) -> Line<'a> {
    let style = if is_selected {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if is_selected { ">" } else { " " };

    Line::from(vec![
        Span::styled(format!(" {} ", marker), style),
        Span::styled(label, style),
        Span::styled(text, style),
    ])
}
