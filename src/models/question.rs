use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub alternatives: Vec<String>,
    pub answer: usize,
}

impl Question {
    pub fn is_correct(&self, alternative: usize) -> bool {
        alternative == self.answer
    }

    pub fn correct_alternative(&self) -> Option<&str> {
        self.alternatives.get(self.answer).map(String::as_str)
    }
}

/// The loaded quiz document: background reference plus its questions.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizData {
    #[serde(default)]
    pub title: String,
    pub bg: String,
    pub questions: Vec<Question>,
}
