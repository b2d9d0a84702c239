use ratatui::{prelude::*, widgets::Paragraph};

use super::{list_line, render_controls};
use crate::app::App;
use crate::models::Language;

const PROMPT: &str = "اختر اللغة / Choose a language:";
const CONTROLS: &str = "j/k · 1-2 · enter · q";

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    frame.render_widget(Paragraph::new(PROMPT).fg(Color::White).bold(), chunks[0]);

    let lines: Vec<Line> = Language::ALL
        .iter()
        .enumerate()
        .map(|(index, language)| {
            list_line(
                format!("{}. ", index + 1),
                language.native_name(),
                index == app.language_cursor(),
            )
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    render_controls(frame, chunks[2], CONTROLS);
}
