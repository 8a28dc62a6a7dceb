mod loading;
mod quiz;
mod result;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::ScreenState;

const DEFAULT_TITLE: &str = "QUIZ";

pub fn render(frame: &mut Frame, app: &App, tick: usize) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_logo(frame, chunks[0], app.title());

    match app.state() {
        ScreenState::Loading => loading::render(frame, chunks[1], tick),
        ScreenState::Quiz { .. } => quiz::render(frame, chunks[1], app),
        ScreenState::Result { results } => result::render(frame, chunks[1], app, results),
    }

    render_background(frame, chunks[2], app.background());
}

fn render_logo(frame: &mut Frame, area: Rect, title: &str) {
    let title = if title.is_empty() { DEFAULT_TITLE } else { title };
    let widget = Paragraph::new(Span::styled(
        title.to_uppercase(),
        Style::default().fg(Color::Cyan).bold(),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_background(frame: &mut Frame, area: Rect, background: &str) {
    if background.is_empty() {
        return;
    }
    let widget = Paragraph::new(format!("bg {}", background))
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::app::App;

    /// Render the whole UI and return the buffer as one string per row.
    pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let frame = terminal.draw(|frame| super::render(frame, app, 0)).unwrap();

        let buffer = frame.buffer;
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }
}
