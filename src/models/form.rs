//! Per-question answer state: the chosen alternative and whether it has
//! been confirmed.

use super::Question;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerForm {
    question_index: usize,
    selected: Option<usize>,
    /// Correctness fixed at confirm time. `None` until submitted.
    submission: Option<bool>,
}

impl AnswerForm {
    pub fn new(question_index: usize) -> Self {
        Self {
            question_index,
            ..Self::default()
        }
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_submitted(&self) -> bool {
        self.submission.is_some()
    }

    /// `Some(correct)` once the answer has been confirmed.
    pub fn submission(&self) -> Option<bool> {
        self.submission
    }

    pub fn can_confirm(&self) -> bool {
        self.selected.is_some() && !self.is_submitted()
    }

    /// Point the form at another question, dropping any stale selection.
    pub fn show(&mut self, question_index: usize) {
        if question_index != self.question_index {
            *self = Self::new(question_index);
        }
    }

    /// Choose `alternative`, replacing the previous choice. Ignored once
    /// submitted or when out of range.
    pub fn select(&mut self, question: &Question, alternative: usize) -> bool {
        if self.is_submitted() || alternative >= question.alternatives.len() {
            return false;
        }
        self.selected = Some(alternative);
        true
    }

    pub fn select_next(&mut self, question: &Question) {
        let count = question.alternatives.len();
        if count == 0 {
            return;
        }
        let next = match self.selected {
            Some(current) => (current + 1) % count,
            None => 0,
        };
        self.select(question, next);
    }

    pub fn select_previous(&mut self, question: &Question) {
        let count = question.alternatives.len();
        if count == 0 {
            return;
        }
        let previous = match self.selected {
            Some(current) => (current + count - 1) % count,
            None => count - 1,
        };
        self.select(question, previous);
    }

    /// Confirm the current selection and return its correctness. Returns
    /// `None` when nothing is selected or the form was already submitted.
    pub fn confirm(&mut self, question: &Question) -> Option<bool> {
        if !self.can_confirm() {
            return None;
        }
        let correct = self.selected.is_some_and(|i| question.is_correct(i));
        self.submission = Some(correct);
        Some(correct)
    }

    pub fn reset(&mut self) {
        self.selected = None;
        self.submission = None;
    }
}
