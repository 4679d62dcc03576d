//! Fixed-pattern quiz generation.

use edubuddy_protocol::QuizItem;
use log::info;

/// Default number of questions in a quiz.
pub const DEFAULT_QUIZ_QUESTIONS: usize = 5;

const OPTIONS: [&str; 4] = ["A", "B", "C", "D"];

/// Build `n_questions` placeholder multiple-choice items about `topic`.
pub fn quiz_generator(topic: &str, n_questions: usize) -> Vec<QuizItem> {
    info!("Tool:quiz_generator called (topic={topic}, n={n_questions})");
    (1..=n_questions)
        .map(|idx| QuizItem {
            question: format!("What is a key point about {topic}? (sample question {idx})"),
            options: OPTIONS.iter().map(|option| option.to_string()).collect(),
            answer: OPTIONS[0].to_string(),
        })
        .collect()
}
