use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::{labels, list_line, render_controls};
use crate::app::App;
use crate::models::NUM_OPTIONS;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let labels = labels(app.language());
    let Some(question) = app.current_question() else {
        return;
    };
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_progress(frame, chunks[0], app);

    let heading = format!(
        "{} {}: {}",
        labels.question,
        app.current_question_number(),
        app.display(question.prompt())
    );
    let widget = Paragraph::new(heading)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, chunks[1]);

    let mut lines: Vec<Line> = Vec::with_capacity(NUM_OPTIONS * 2);
    for (index, option) in question.options().iter().enumerate() {
        lines.push(list_line(
            format!("{}. ", index + 1),
            app.display(option),
            index == app.selected_option(),
        ));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines), chunks[2]);

    render_controls(frame, chunks[3], labels.quiz_controls);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "{}  {}/{}",
        app.display(app.current_topic().map_or("", |topic| topic.name())),
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
