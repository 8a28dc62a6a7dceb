use crossterm::event::KeyCode;

use crate::app::App;
use crate::models::ScreenState;
use crate::timer::Schedule;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    None,
    /// A timer the controller asked for.
    Schedule(Schedule),
    /// Throw the session away and start over from loading.
    Restart,
    Quit,
}

pub fn handle_input(app: &mut App, key: KeyCode) -> Input {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return Input::Quit;
    }

    match app.state() {
        ScreenState::Loading => Input::None,
        ScreenState::Quiz { .. } => handle_quiz_input(app, key),
        ScreenState::Result { .. } => handle_result_input(app, key),
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Input {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_alternative(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_alternative(),
        KeyCode::Char(c @ '1'..='9') => {
            let alternative = c as usize - '1' as usize;
            app.select_alternative(alternative);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(schedule) = app.confirm() {
                return Input::Schedule(schedule);
            }
        }
        _ => {}
    }
    Input::None
}

fn handle_result_input(app: &mut App, key: KeyCode) -> Input {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => Input::Restart,
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.toggle_answer_key();
            Input::None
        }
        _ => Input::None,
    }
}
