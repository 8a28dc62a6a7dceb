//! # news-quiz
//!
//! A terminal quiz player: a loading screen, one question at a time with
//! correctness feedback, and a score summary at the end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use news_quiz::{Quiz, QuizConfig, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::from_json("quiz.json", QuizConfig::default())?;
//!     quiz.run().await
//! }
//! ```

mod app;
pub mod config;
mod data;
mod input;
mod models;
pub mod score;
pub mod terminal;
pub mod timer;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tracing::{debug, info};

pub use app::App;
pub use config::QuizConfig;
pub use data::{load_quiz_from_json, validate_questions, LoadError};
pub use input::{handle_input, Input};
pub use models::{AnswerForm, Question, QuizData, ResultsLog, ScreenState};
pub use timer::{Schedule, TimerId, TimerKind, Timers};

/// Redraw interval; also the loading spinner frame rate.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("Quiz needs at least one question")]
    NoQuestions,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A loaded quiz that can be played in the terminal.
pub struct Quiz {
    data: QuizData,
    config: QuizConfig,
}

impl Quiz {
    /// Create a quiz from already-loaded data. Fails if the data could not
    /// produce a playable session.
    pub fn new(data: QuizData, config: QuizConfig) -> Result<Self, QuizError> {
        App::from_data(&data, config)?;
        Ok(Self { data, config })
    }

    /// Load a quiz from a JSON document of the form
    /// `{ "bg": "...", "questions": [...] }`.
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        let data = load_quiz_from_json(path)?;
        Self::new(data, config)
    }

    pub fn data(&self) -> &QuizData {
        &self.data
    }

    /// A fresh, unmounted controller for this quiz.
    pub fn session(&self) -> Result<App, QuizError> {
        App::from_data(&self.data, self.config)
    }

    /// Take over the terminal and play until the user quits.
    pub async fn run(self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &self).await
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    quiz: &Quiz,
) -> Result<(), QuizError> {
    let mut app = quiz.session()?;
    let mut timers = Timers::new();
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_RATE);
    let started = Instant::now();

    if let Some(schedule) = app.mount() {
        timers.schedule(schedule);
    }

    loop {
        let tick = (started.elapsed().as_millis() / TICK_RATE.as_millis()) as usize;
        terminal.draw(|frame| ui::render(frame, &app, tick))?;

        tokio::select! {
            _ = ticker.tick() => {}
            Some(id) = timers.recv() => {
                app.on_timer(id);
            }
            event = events.next() => {
                let key = match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => key,
                    Some(Ok(_)) => continue,
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                };

                match handle_input(&mut app, key.code) {
                    Input::None => {}
                    Input::Schedule(schedule) => timers.schedule(schedule),
                    Input::Restart => {
                        for id in app.unmount() {
                            timers.cancel(id);
                        }
                        app = quiz.session()?;
                        if let Some(schedule) = app.mount() {
                            timers.schedule(schedule);
                        }
                        info!("quiz restarted");
                    }
                    Input::Quit => break,
                }
            }
        }
    }

    for id in app.unmount() {
        timers.cancel(id);
    }
    debug!(pending = timers.pending(), "event loop finished");
    Ok(())
}
