use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const TITLE: &str = "من سيربح المليون";
const SCHOOL: &str = "EduDream School";
const AUTHOR: &str = "إعداد الأستاذ/ إسلام فارس";

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(TITLE, Style::default().fg(Color::Yellow).bold())),
        Line::from(""),
        Line::from(SCHOOL.fg(Color::Cyan)),
        Line::from(AUTHOR.fg(Color::DarkGray)),
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to start · q to quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
