use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn render(frame: &mut Frame, area: Rect, tick: usize) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "JÁ VAI COMEÇAR",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            SPINNER[tick % SPINNER.len()],
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    #[test]
    fn spinner_advances_with_tick() {
        let mut frames = Vec::new();
        for tick in 0..2 {
            let backend = TestBackend::new(40, 12);
            let mut terminal = Terminal::new(backend).unwrap();
            let frame = terminal
                .draw(|frame| {
                    let area = frame.area();
                    render(frame, area, tick);
                })
                .unwrap();
            let text: String = frame
                .buffer
                .content
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect();
            assert!(text.contains("JÁ VAI COMEÇAR"));
            frames.push(text);
        }
        assert_ne!(frames[0], frames[1]);
    }
}
