//! Scripted study-help session run by the `edubuddy` binary.

use edubuddy_core::{EduBuddyAgent, EduBuddyCoreError};
use edubuddy_memory::MemoryStore;
use edubuddy_protocol::{ActionRecord, Flashcard, QuizItem};
use edubuddy_tools::ResponseGenerator;
use log::info;
use serde::Serialize;
use std::sync::Arc;

/// User the demo acts for.
pub const DEMO_USER: &str = "shaumi_01";
/// Request the demo answers.
pub const DEMO_REQUEST: &str =
    "Study help: Probability Distributions. Give a 5-min summary, 8 flashcards, and 5 quiz questions.";
const SEARCH_QUERY: &str = "Probability distributions overview for students";
const ARTICLE_TEXT: &str =
    "Probability distributions describe the likelihood of outcomes... (sample)";
const QUIZ_TOPIC: &str = "Probability distributions";
const FLASHCARD_COUNT: usize = 8;
const QUIZ_QUESTIONS: usize = 5;

/// Result printed at the end of the demo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoOutput {
    pub summary: String,
    pub flashcards: Vec<Flashcard>,
    pub quiz: Vec<QuizItem>,
}

/// Run the scripted request and commit the session to `store`.
pub fn run_demo(
    store: Arc<dyn MemoryStore>,
    generator: Arc<dyn ResponseGenerator>,
    search_top_k: usize,
) -> Result<DemoOutput, EduBuddyCoreError> {
    let mut agent =
        EduBuddyAgent::new(DEMO_USER, store, generator)?.with_search_top_k(search_top_k);
    info!(
        "handling request (user_id={}, request={})",
        agent.user_id(),
        DEMO_REQUEST
    );

    let hits = agent.search(SEARCH_QUERY);
    info!("search finished (hits={})", hits.len());
    let summary = agent.summarize(ARTICLE_TEXT);
    let flashcards = agent.make_flashcards(&summary, FLASHCARD_COUNT);
    let quiz = agent.quiz(QUIZ_TOPIC, QUIZ_QUESTIONS);

    agent.log_custom(ActionRecord::final_output(
        summary.clone(),
        flashcards.len(),
        quiz.len(),
    ));
    agent.commit()?;

    Ok(DemoOutput {
        summary,
        flashcards,
        quiz,
    })
}
