use std::time::Duration;

/// How long the loading screen stays up after mount.
pub const LOADING_DELAY: Duration = Duration::from_millis(2000);

/// How long correctness feedback is shown before moving on.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub loading_delay: Duration,
    pub feedback_delay: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            loading_delay: LOADING_DELAY,
            feedback_delay: FEEDBACK_DELAY,
        }
    }
}

impl QuizConfig {
    pub fn from_millis(loading_ms: u64, feedback_ms: u64) -> Self {
        Self {
            loading_delay: Duration::from_millis(loading_ms),
            feedback_delay: Duration::from_millis(feedback_ms),
        }
    }
}
