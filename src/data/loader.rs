use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Question, QuizData};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} must contain at least one question")]
    Empty { path: PathBuf },

    #[error("question {question} has no alternatives")]
    NoAlternatives { question: usize },

    #[error("question {question} answer {answer} is out of range for {alternatives} alternatives")]
    AnswerOutOfRange {
        question: usize,
        answer: usize,
        alternatives: usize,
    },
}

pub fn load_quiz_from_json<P: AsRef<Path>>(path: P) -> Result<QuizData, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let quiz: QuizData = serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if quiz.questions.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    validate_questions(&quiz.questions)?;

    info!(
        path = %path.display(),
        questions = quiz.questions.len(),
        "loaded quiz"
    );
    Ok(quiz)
}

/// Reject questions whose answer can never be chosen.
pub fn validate_questions(questions: &[Question]) -> Result<(), LoadError> {
    for (index, question) in questions.iter().enumerate() {
        let number = index + 1;
        if question.alternatives.is_empty() {
            return Err(LoadError::NoAlternatives { question: number });
        }
        if question.answer >= question.alternatives.len() {
            return Err(LoadError::AnswerOutOfRange {
                question: number,
                answer: question.answer,
                alternatives: question.alternatives.len(),
            });
        }
        debug!(question = number, alternatives = question.alternatives.len(), "question ok");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_valid_document() {
        let file = write_json(
            r#"{
                "title": "Fake or Fact",
                "bg": "https://example.com/bg.jpg",
                "questions": [
                    {
                        "title": "Is it true?",
                        "description": "A headline",
                        "image": "https://example.com/1.jpg",
                        "alternatives": ["Fato", "Fake"],
                        "answer": 1
                    }
                ]
            }"#,
        );

        let quiz = load_quiz_from_json(file.path()).unwrap();
        assert_eq!(quiz.title, "Fake or Fact");
        assert_eq!(quiz.bg, "https://example.com/bg.jpg");
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].correct_alternative(), Some("Fake"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_quiz_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = write_json("{ not json");
        let err = load_quiz_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn empty_question_list_is_rejected() {
        let file = write_json(r#"{ "bg": "bg.jpg", "questions": [] }"#);
        let err = load_quiz_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn out_of_range_answer_is_rejected_at_load() {
        let file = write_json(
            r#"{ "bg": "bg.jpg", "questions": [
                { "title": "ok", "alternatives": ["A", "B"], "answer": 0 },
                { "title": "bad", "alternatives": ["A", "B"], "answer": 2 }
            ] }"#,
        );
        let err = load_quiz_from_json(file.path()).unwrap_err();
        match err {
            LoadError::AnswerOutOfRange {
                question,
                answer,
                alternatives,
            } => {
                assert_eq!(question, 2);
                assert_eq!(answer, 2);
                assert_eq!(alternatives, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn question_without_alternatives_is_rejected() {
        let file = write_json(
            r#"{ "bg": "bg.jpg", "questions": [
                { "title": "none", "alternatives": [], "answer": 0 }
            ] }"#,
        );
        let err = load_quiz_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoAlternatives { question: 1 }));
    }
}
