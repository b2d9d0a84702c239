use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use super::{labels, list_line, render_controls};
use crate::app::App;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let labels = labels(app.language());
    let chunks = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    if app.topic_not_found() {
        let notice = Paragraph::new(labels.topic_not_found)
            .wrap(Wrap { trim: true })
            .fg(Color::Yellow);
        frame.render_widget(notice, chunks[0]);
    }

    frame.render_widget(
        Paragraph::new(labels.select_topic).fg(Color::White).bold(),
        chunks[1],
    );

    let lines: Vec<Line> = app
        .topics()
        .iter()
        .enumerate()
        .map(|(index, topic)| {
            list_line(
                format!("{}. ", index + 1),
                app.display(topic.name()),
                index == app.topic_cursor(),
            )
        })
        .collect();
    let visible = chunks[2].height as usize;
    let scroll = app.topic_cursor().saturating_sub(visible.saturating_sub(1));
    frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), chunks[2]);

    render_controls(frame, chunks[3], labels.list_controls);
}
