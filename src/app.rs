use tracing::{debug, info};

use crate::config::QuizConfig;
use crate::data::validate_questions;
use crate::models::{AnswerForm, Question, QuizData, ResultsLog, ScreenState};
use crate::timer::{Schedule, TimerId, TimerKind};
use crate::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Unmounted,
}

/// The quiz controller: screen state, current question and results log.
///
/// Timing is requested through [`Schedule`] values; the caller delivers the
/// matching [`TimerId`] back through [`App::on_timer`].
pub struct App {
    state: ScreenState,
    questions: Vec<Question>,
    title: String,
    background: String,
    config: QuizConfig,
    form: AnswerForm,
    results: ResultsLog,
    lifecycle: Lifecycle,
    next_timer: u64,
    loading_timer: Option<TimerId>,
    feedback_timer: Option<TimerId>,
    show_answer_key: bool,
}

impl App {
    pub fn new(
        questions: Vec<Question>,
        background: impl Into<String>,
        config: QuizConfig,
    ) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        validate_questions(&questions)?;

        Ok(Self {
            state: ScreenState::Loading,
            questions,
            title: String::new(),
            background: background.into(),
            config,
            form: AnswerForm::new(0),
            results: Vec::new(),
            lifecycle: Lifecycle::Created,
            next_timer: 0,
            loading_timer: None,
            feedback_timer: None,
            show_answer_key: false,
        })
    }

    pub fn from_data(data: &QuizData, config: QuizConfig) -> Result<Self, QuizError> {
        let mut app = Self::new(data.questions.clone(), data.bg.clone(), config)?;
        app.title = data.title.clone();
        Ok(app)
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn config(&self) -> QuizConfig {
        self.config
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            ScreenState::Quiz { current_index } => self.questions.get(current_index),
            _ => None,
        }
    }

    pub fn current_question_number(&self) -> usize {
        self.form.question_index() + 1
    }

    pub fn form(&self) -> &AnswerForm {
        &self.form
    }

    pub fn results(&self) -> &[bool] {
        match &self.state {
            ScreenState::Result { results } => results,
            _ => &self.results,
        }
    }

    pub fn show_answer_key(&self) -> bool {
        self.show_answer_key
    }

    /// Start the session. Returns the loading timer to schedule; `None` if
    /// already mounted or torn down.
    pub fn mount(&mut self) -> Option<Schedule> {
        if self.lifecycle != Lifecycle::Created {
            return None;
        }
        self.lifecycle = Lifecycle::Mounted;

        let schedule = self.issue_timer(TimerKind::Loading, self.config.loading_delay);
        self.loading_timer = Some(schedule.id);
        info!(questions = self.questions.len(), "quiz mounted");
        Some(schedule)
    }

    /// Tear down the session. Timers delivered afterwards are ignored.
    /// Returns the ids that were still pending so the caller can cancel them.
    pub fn unmount(&mut self) -> Vec<TimerId> {
        self.lifecycle = Lifecycle::Unmounted;
        let pending: Vec<TimerId> = self
            .loading_timer
            .take()
            .into_iter()
            .chain(self.feedback_timer.take())
            .collect();
        info!(pending = pending.len(), "quiz unmounted");
        pending
    }

    /// Deliver a fired timer. Returns true if it changed state.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.is_mounted() {
            debug!(timer = %id, "timer after unmount ignored");
            return false;
        }

        if self.loading_timer == Some(id) {
            self.loading_timer = None;
            self.finish_loading();
            true
        } else if self.feedback_timer == Some(id) {
            self.feedback_timer = None;
            self.finish_feedback();
            true
        } else {
            debug!(timer = %id, "unknown timer ignored");
            false
        }
    }

    pub fn select_alternative(&mut self, alternative: usize) {
        if let ScreenState::Quiz { current_index } = self.state {
            let question = &self.questions[current_index];
            self.form.select(question, alternative);
        }
    }

    pub fn select_next_alternative(&mut self) {
        if let ScreenState::Quiz { current_index } = self.state {
            self.form.select_next(&self.questions[current_index]);
        }
    }

    pub fn select_previous_alternative(&mut self) {
        if let ScreenState::Quiz { current_index } = self.state {
            self.form.select_previous(&self.questions[current_index]);
        }
    }

    /// Confirm the selected alternative. Returns the feedback timer to
    /// schedule, or `None` when confirm is not available.
    pub fn confirm(&mut self) -> Option<Schedule> {
        if !self.is_mounted() {
            return None;
        }
        let ScreenState::Quiz { current_index } = self.state else {
            return None;
        };

        let correct = self.form.confirm(&self.questions[current_index])?;
        info!(question = current_index + 1, correct, "answer confirmed");

        let schedule = self.issue_timer(TimerKind::Feedback, self.config.feedback_delay);
        self.feedback_timer = Some(schedule.id);
        Some(schedule)
    }

    pub fn toggle_answer_key(&mut self) {
        if self.state.is_terminal() {
            self.show_answer_key = !self.show_answer_key;
        }
    }

    fn issue_timer(&mut self, kind: TimerKind, after: std::time::Duration) -> Schedule {
        self.next_timer += 1;
        Schedule {
            id: TimerId::new(self.next_timer),
            kind,
            after,
        }
    }

    fn finish_loading(&mut self) {
        if self.state == ScreenState::Loading {
            self.state = ScreenState::Quiz { current_index: 0 };
            self.form.show(0);
            info!("loading finished, quiz started");
        }
    }

    fn finish_feedback(&mut self) {
        let Some(correct) = self.form.submission() else {
            return;
        };
        self.add_result(correct);
        self.handle_submit();
        self.form.reset();
    }

    fn add_result(&mut self, correct: bool) {
        self.results.push(correct);
    }

    fn handle_submit(&mut self) {
        let ScreenState::Quiz { current_index } = self.state else {
            return;
        };

        let next_index = current_index + 1;
        if next_index < self.questions.len() {
            self.state = ScreenState::Quiz {
                current_index: next_index,
            };
            self.form.show(next_index);
            debug!(question = next_index + 1, "advanced to next question");
        } else {
            let results = std::mem::take(&mut self.results);
            info!(
                score = crate::score::score(&results),
                total = results.len(),
                "quiz finished"
            );
            self.state = ScreenState::Result { results };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(alternatives: &[&str], answer: usize) -> Question {
        Question {
            title: "Q".to_string(),
            description: "D".to_string(),
            image: "img.png".to_string(),
            alternatives: alternatives.iter().map(|a| a.to_string()).collect(),
            answer,
        }
    }

    fn two_questions() -> Vec<Question> {
        vec![question(&["A", "B"], 1), question(&["C", "D"], 0)]
    }

    fn mounted_quiz(questions: Vec<Question>) -> App {
        let mut app = App::new(questions, "bg.jpg", QuizConfig::default()).unwrap();
        let loading = app.mount().unwrap();
        assert!(app.on_timer(loading.id));
        app
    }

    fn answer(app: &mut App, alternative: usize) {
        app.select_alternative(alternative);
        let feedback = app.confirm().unwrap();
        assert!(app.on_timer(feedback.id));
    }

    #[test]
    fn empty_question_list_fails_fast() {
        let result = App::new(Vec::new(), "bg.jpg", QuizConfig::default());
        assert!(matches!(result, Err(QuizError::NoQuestions)));
    }

    #[test]
    fn invalid_answer_index_is_rejected() {
        let result = App::new(vec![question(&["A"], 3)], "bg.jpg", QuizConfig::default());
        assert!(matches!(result, Err(QuizError::Load(_))));
    }

    #[test]
    fn starts_loading_and_schedules_loading_delay() {
        let mut app = App::new(two_questions(), "bg.jpg", QuizConfig::default()).unwrap();
        assert_eq!(app.state(), &ScreenState::Loading);

        let loading = app.mount().unwrap();
        assert_eq!(loading.kind, TimerKind::Loading);
        assert_eq!(loading.after, crate::config::LOADING_DELAY);
        assert!(app.mount().is_none());

        assert!(app.on_timer(loading.id));
        assert_eq!(app.state(), &ScreenState::Quiz { current_index: 0 });
    }

    #[test]
    fn input_ignored_while_loading() {
        let mut app = App::new(two_questions(), "bg.jpg", QuizConfig::default()).unwrap();
        app.mount();

        app.select_alternative(1);
        assert_eq!(app.form().selected(), None);
        assert!(app.confirm().is_none());
    }

    #[test]
    fn answered_question_shows_feedback_before_advancing() {
        let mut app = mounted_quiz(two_questions());
        app.select_alternative(1);
        let feedback = app.confirm().unwrap();
        assert_eq!(feedback.kind, TimerKind::Feedback);
        assert_eq!(feedback.after, crate::config::FEEDBACK_DELAY);

        assert!(app.form().is_submitted());
        assert_eq!(app.form().submission(), Some(true));
        assert!(app.results().is_empty());
        assert_eq!(app.state(), &ScreenState::Quiz { current_index: 0 });

        assert!(app.on_timer(feedback.id));
        assert_eq!(app.results(), &[true]);
        assert_eq!(app.state(), &ScreenState::Quiz { current_index: 1 });
        assert_eq!(app.form().selected(), None);
        assert!(!app.form().is_submitted());
    }

    #[test]
    fn no_resubmission_during_feedback() {
        let mut app = mounted_quiz(two_questions());
        app.select_alternative(0);
        assert!(app.confirm().is_some());

        app.select_alternative(1);
        assert!(app.confirm().is_none());
        assert_eq!(app.form().submission(), Some(false));
    }

    #[test]
    fn result_reached_only_on_last_submission() {
        let questions = vec![
            question(&["A", "B"], 0),
            question(&["A", "B"], 0),
            question(&["A", "B"], 0),
        ];
        let mut app = mounted_quiz(questions);

        answer(&mut app, 0);
        assert!(!app.state().is_terminal());
        answer(&mut app, 1);
        assert!(!app.state().is_terminal());
        answer(&mut app, 0);

        assert_eq!(
            app.state(),
            &ScreenState::Result {
                results: vec![true, false, true]
            }
        );
    }

    #[test]
    fn timers_after_unmount_are_noops() {
        let mut app = App::new(two_questions(), "bg.jpg", QuizConfig::default()).unwrap();
        let loading = app.mount().unwrap();

        let pending = app.unmount();
        assert_eq!(pending, vec![loading.id]);

        assert!(!app.on_timer(loading.id));
        assert_eq!(app.state(), &ScreenState::Loading);
        assert!(app.mount().is_none());
    }

    #[test]
    fn feedback_timer_after_unmount_does_not_record() {
        let mut app = mounted_quiz(two_questions());
        app.select_alternative(1);
        let feedback = app.confirm().unwrap();

        app.unmount();
        assert!(!app.on_timer(feedback.id));
        assert!(app.results().is_empty());
    }

    #[test]
    fn stale_timer_ids_are_ignored() {
        let mut app = App::new(two_questions(), "bg.jpg", QuizConfig::default()).unwrap();
        let loading = app.mount().unwrap();
        assert!(app.on_timer(loading.id));

        // Delivered twice.
        assert!(!app.on_timer(loading.id));
        assert_eq!(app.state(), &ScreenState::Quiz { current_index: 0 });
    }

    #[test]
    fn answer_key_toggles_only_on_result() {
        let mut app = mounted_quiz(vec![question(&["A", "B"], 0)]);
        app.toggle_answer_key();
        assert!(!app.show_answer_key());

        answer(&mut app, 0);
        app.toggle_answer_key();
        assert!(app.show_answer_key());
    }

    #[test]
    fn from_data_keeps_title_and_background() {
        let data = QuizData {
            title: "Fake News".to_string(),
            bg: "bg.jpg".to_string(),
            questions: two_questions(),
        };
        let app = App::from_data(&data, QuizConfig::default()).unwrap();
        assert_eq!(app.title(), "Fake News");
        assert_eq!(app.background(), "bg.jpg");
        assert_eq!(app.total_questions(), 2);
    }
}
