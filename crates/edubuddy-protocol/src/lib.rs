//! Shared types for EduBuddy tools, agent actions, and the memory bank.

mod action;

pub use action::{
    ActionRecord, FinalOutputAction, FlashcardsAction, QuizAction, SummarizeAction,
    WebSearchAction,
};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Seconds since the Unix epoch, with sub-second precision.
pub type Timestamp = f64;

/// Current wall-clock time as a [`Timestamp`].
pub fn now_timestamp() -> Timestamp {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
}

/// A single synthetic web search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchHit {
    /// Hit title.
    pub title: String,
    /// Short excerpt.
    pub snippet: String,
    /// Hit URL.
    pub url: String,
}

/// Multiple-choice quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    /// Question text.
    pub question: String,
    /// Answer options, in display order.
    pub options: Vec<String>,
    /// The correct option.
    pub answer: String,
}

/// Question/answer study card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
}
