use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{AnswerForm, Question};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };
    let form = app.form();

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], app);
    render_image(frame, chunks[1], &question.image);
    render_question_text(frame, chunks[2], question);
    render_alternatives(frame, chunks[3], question, form);
    render_status(frame, chunks[4], form);
    render_confirm(frame, chunks[5], form);
    render_controls(frame, chunks[6]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let progress = format!(
        "Pergunta {} de {}",
        app.current_question_number(),
        app.total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Left)
        .style(Style::default().fg(Color::Cyan).bold());
    frame.render_widget(widget, area);
}

fn render_image(frame: &mut Frame, area: Rect, image: &str) {
    if image.is_empty() {
        return;
    }
    let widget = Paragraph::new(format!("[imagem] {}", image)).fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &Question) {
    let content = vec![
        Line::from(Span::styled(
            question.title.as_str(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.description.as_str(),
            Style::default().fg(Color::Gray),
        )),
    ];

    let widget = Paragraph::new(content).wrap(Wrap { trim: true });
    frame.render_widget(widget, area);
}

fn render_alternatives(frame: &mut Frame, area: Rect, question: &Question, form: &AnswerForm) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.alternatives.len() * 2);

    for (index, alternative) in question.alternatives.iter().enumerate() {
        let is_selected = form.selected() == Some(index);
        let style = match (is_selected, form.submission()) {
            (true, Some(true)) => Style::default().fg(Color::Green).bold(),
            (true, Some(false)) => Style::default().fg(Color::Red).bold(),
            (true, None) => Style::default().fg(Color::Yellow).bold(),
            (false, _) => Style::default().fg(Color::Gray),
        };
        let marker = if is_selected { "(•)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(alternative.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, form: &AnswerForm) {
    let (text, color) = match form.submission() {
        Some(true) => ("✔ Resposta certa", Color::Green),
        Some(false) => ("✘ Resposta errada", Color::Red),
        None => return,
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).bold());
    frame.render_widget(widget, area);
}

fn render_confirm(frame: &mut Frame, area: Rect, form: &AnswerForm) {
    let style = if form.can_confirm() {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let widget = Paragraph::new("Confirmar →")
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k or 1-9 select  ·  enter confirm  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
