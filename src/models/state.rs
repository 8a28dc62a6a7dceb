/// Ordered per-question correctness, one entry per completed question.
pub type ResultsLog = Vec<bool>;

/// Which screen the controller is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    /// Waiting for the loading delay to elapse.
    Loading,
    /// Answering the question at `current_index`.
    Quiz { current_index: usize },
    /// Quiz finished with the full results log.
    Result { results: ResultsLog },
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Loading
    }
}

impl ScreenState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Result { .. })
    }
}
