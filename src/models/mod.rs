mod form;
mod question;
mod state;

pub use form::AnswerForm;
pub use question::{Question, QuizData};
pub use state::{ResultsLog, ScreenState};
