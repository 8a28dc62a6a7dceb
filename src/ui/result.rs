use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::score;

pub fn render(frame: &mut Frame, area: Rect, app: &App, results: &[bool]) {
    let chunks = Layout::vertical([
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], results);
    if app.show_answer_key() {
        render_answer_key(frame, chunks[1], app);
    } else {
        render_description(frame, chunks[1], results);
    }
    render_controls(frame, chunks[2], app.show_answer_key());
}

fn render_score_summary(frame: &mut Frame, area: Rect, results: &[bool]) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "🏁 SUA PONTUAÇÃO:",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            score::headline(results),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_description(frame: &mut Frame, area: Rect, results: &[bool]) {
    let lines: Vec<Line> = score::description(results)
        .into_iter()
        .zip(results)
        .map(|(line, correct)| {
            let color = if *correct { Color::Green } else { Color::Red };
            Line::from(Span::styled(line, Style::default().fg(color)))
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(1)));
    frame.render_widget(widget, area);
}

fn render_answer_key(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = score::answer_key(app.questions())
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::Gray))))
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Respostas certas ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, showing_key: bool) {
    let key_hint = if showing_key { "a score" } else { "a answers" };
    let widget = Paragraph::new(format!("r play again  ·  {}  ·  q quit", key_hint))
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
