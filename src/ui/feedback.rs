use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{labels, render_controls};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let labels = labels(app.language());
    let Some(question) = app.current_question() else {
        return;
    };
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    let verdict = if app.last_answer_correct() {
        Line::from(Span::styled(
            labels.correct,
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from(vec![
            Span::styled(labels.incorrect, Style::default().fg(Color::Red).bold()),
            Span::raw(" "),
            Span::styled(
                app.display(question.correct_option()),
                Style::default().fg(Color::Cyan),
            ),
        ])
    };

    let content = vec![
        Line::from(""),
        Line::from(app.display(question.prompt()).fg(Color::Gray)),
        Line::from(""),
        verdict,
        Line::from(""),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, chunks[1]);

    render_controls(frame, chunks[3], labels.feedback_controls);
}
