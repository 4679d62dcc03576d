//! Study agent for a single user session.
//!
//! The agent registers its user on construction, keeps an in-memory
//! [`SessionRecord`], appends an [`ActionRecord`] after every step, and
//! writes the session to the store on [`EduBuddyAgent::commit`].

use crate::EduBuddyCoreError;
use edubuddy_memory::{MemoryStore, SessionRecord};
use edubuddy_protocol::{
    ActionRecord, Flashcard, FlashcardsAction, QuizAction, QuizItem, SearchHit, SummarizeAction,
    WebSearchAction, now_timestamp,
};
use edubuddy_tools::{DEFAULT_SEARCH_TOP_K, ResponseGenerator, quiz_generator, web_search};
use log::{debug, info, warn};
use std::sync::Arc;

/// Flashcards produced when the caller does not ask for a count.
pub const DEFAULT_FLASHCARDS: usize = 10;

/// Agent bound to one user and one open session.
pub struct EduBuddyAgent {
    user_id: String,
    store: Arc<dyn MemoryStore>,
    generator: Arc<dyn ResponseGenerator>,
    search_top_k: usize,
    session: SessionRecord,
}

impl EduBuddyAgent {
    /// Create an agent for `user_id`, registering the user with the store.
    pub fn new(
        user_id: impl Into<String>,
        store: Arc<dyn MemoryStore>,
        generator: Arc<dyn ResponseGenerator>,
    ) -> Result<Self, EduBuddyCoreError> {
        let user_id = user_id.into();
        store.ensure_user(&user_id)?;
        let session = SessionRecord::new(now_timestamp());
        info!(
            "agent session started (user_id={}, start_time={})",
            user_id, session.start_time
        );
        Ok(Self {
            user_id,
            store,
            generator,
            search_top_k: DEFAULT_SEARCH_TOP_K,
            session,
        })
    }

    /// Override the number of hits requested by [`Self::search`].
    pub fn with_search_top_k(mut self, top_k: usize) -> Self {
        self.search_top_k = top_k;
        self
    }

    /// The user this agent acts for.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// The in-progress session.
    pub fn session(&self) -> &SessionRecord {
        &self.session
    }

    /// Append an action to the in-progress session.
    pub fn log_custom(&mut self, action: ActionRecord) {
        info!("Agent action: {}", action.to_value());
        self.session.actions.push(action);
    }

    /// Summarize `text` through the response generator.
    pub fn summarize(&mut self, text: &str) -> String {
        let prompt = format!("Summarize the following text for a student:\n{text}\nMake it concise.");
        let response = self.generator.generate(&prompt);
        self.log_custom(ActionRecord::Summarize(SummarizeAction {
            prompt,
            result_preview: response.clone(),
        }));
        response
    }

    /// Produce `n` placeholder flashcards for `summary`.
    ///
    /// The generator is consulted for the action log, but the cards
    /// themselves are fixed placeholders.
    pub fn make_flashcards(&mut self, summary: &str, n: usize) -> Vec<Flashcard> {
        let prompt = format!("Generate {n} flashcards from this summary:\n{summary}");
        let response = self.generator.generate(&prompt);
        self.log_custom(ActionRecord::Flashcards(FlashcardsAction {
            prompt,
            result_preview: response,
        }));
        (1..=n)
            .map(|idx| Flashcard {
                front: format!("What is {idx}?"),
                back: "Short answer".to_string(),
            })
            .collect()
    }

    /// Generate an `n` question quiz on `topic`.
    pub fn quiz(&mut self, topic: &str, n: usize) -> Vec<QuizItem> {
        let items = quiz_generator(topic, n);
        self.log_custom(ActionRecord::Quiz(QuizAction {
            topic: topic.to_string(),
            n,
        }));
        items
    }

    /// Run a simulated web search.
    pub fn search(&mut self, query: &str) -> Vec<SearchHit> {
        let hits = web_search(query, self.search_top_k);
        self.log_custom(ActionRecord::WebSearch(WebSearchAction {
            query: query.to_string(),
            hits: hits.clone(),
        }));
        hits
    }

    /// Close the session and append a snapshot of it to the store.
    ///
    /// Each call appends another record; later actions are only persisted
    /// by a later commit.
    pub fn commit(&mut self) -> Result<(), EduBuddyCoreError> {
        if self.session.end_time.is_some() {
            warn!(
                "committing an already committed session (user_id={})",
                self.user_id
            );
        }
        self.session.end_time = Some(now_timestamp());
        self.store
            .append_session(&self.user_id, self.session.clone())?;
        debug!(
            "session committed (user_id={}, actions={})",
            self.user_id,
            self.session.actions.len()
        );
        Ok(())
    }
}
