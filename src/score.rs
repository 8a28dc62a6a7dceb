//! Score summary derived from the results log.

use crate::models::Question;

pub fn score(results: &[bool]) -> usize {
    results.iter().filter(|correct| **correct).count()
}

/// "1 Notícia" or "{n} Notícias".
pub fn score_label(score: usize) -> String {
    if score == 1 {
        format!("{} Notícia", score)
    } else {
        format!("{} Notícias", score)
    }
}

pub fn headline(results: &[bool]) -> String {
    format!("Você acertou {}", score_label(score(results)))
}

/// One line per question, in question order.
pub fn description(results: &[bool]) -> Vec<String> {
    results
        .iter()
        .enumerate()
        .map(|(index, correct)| {
            let verdict = if *correct { "✅ acertou" } else { "❌ errou" };
            format!("Pergunta {}: {}", index + 1, verdict)
        })
        .collect()
}

/// Each question with its correct alternative.
pub fn answer_key(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            format!(
                "Pergunta {}: {} → {}",
                index + 1,
                question.title,
                question.correct_alternative().unwrap_or("?")
            )
        })
        .collect()
}
