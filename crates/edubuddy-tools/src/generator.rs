//! Stand-in for a language model call.
//!
//! The canned generator ignores its prompt and returns one of a few fixed
//! strings chosen uniformly at random, tagged with [`STUB_MARKER`]. The
//! randomness source is injected so a fixed seed gives a fixed sequence.

use log::{debug, warn};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Suffix appended to every canned response.
pub const STUB_MARKER: &str = " [LLM-stub response].";

/// Responses used when no override is configured.
pub const DEFAULT_CANNED_RESPONSES: [&str; 4] = [
    "Sure — here's a concise summary of the material.",
    "I generated 10 flashcards focusing on core facts and concepts.",
    "Quiz ready: 5 MCQs with answers.",
    "I used web sources to supplement the answer and added citations.",
];

/// Produces a text response for a prompt.
pub trait ResponseGenerator: Send + Sync {
    /// Generate a response for `prompt`.
    fn generate(&self, prompt: &str) -> String;
}

/// Generator returning a random canned response.
#[derive(Debug)]
pub struct CannedResponseGenerator {
    responses: Vec<String>,
    rng: Mutex<StdRng>,
}

impl CannedResponseGenerator {
    /// Deterministic generator for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Build from a seed when one is given, otherwise from entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            responses: DEFAULT_CANNED_RESPONSES
                .iter()
                .map(|response| response.to_string())
                .collect(),
            rng: Mutex::new(rng),
        }
    }

    /// Replace the canned set. An empty set keeps the current responses.
    pub fn with_responses(mut self, responses: Vec<String>) -> Self {
        if responses.is_empty() {
            warn!("ignoring empty canned response override");
            return self;
        }
        self.responses = responses;
        self
    }

    /// The canned responses, without the marker.
    pub fn responses(&self) -> &[String] {
        &self.responses
    }
}

impl ResponseGenerator for CannedResponseGenerator {
    fn generate(&self, prompt: &str) -> String {
        let choice = {
            let mut rng = self.rng.lock();
            self.responses
                .choose(&mut *rng)
                .map(String::as_str)
                .unwrap_or_default()
        };
        debug!(
            "canned response selected (prompt_len={}, response_len={})",
            prompt.len(),
            choice.len()
        );
        format!("{choice}{STUB_MARKER}")
    }
}

#[cfg(test)]
mod tests {
    use super::{CannedResponseGenerator, DEFAULT_CANNED_RESPONSES, ResponseGenerator, STUB_MARKER};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn same_seed_gives_same_sequence() {
        let first = CannedResponseGenerator::seeded(7);
        let second = CannedResponseGenerator::seeded(7);
        let a: Vec<String> = (0..20).map(|_| first.generate("anything")).collect();
        let b: Vec<String> = (0..20).map(|_| second.generate("something else")).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn responses_are_canned_and_marked() {
        let generator = CannedResponseGenerator::seeded(1);
        for _ in 0..20 {
            let response = generator.generate("prompt");
            let body = response.strip_suffix(STUB_MARKER).expect("marker");
            assert!(DEFAULT_CANNED_RESPONSES.contains(&body));
        }
    }

    #[test]
    fn every_canned_response_is_reachable() {
        let generator = CannedResponseGenerator::seeded(42);
        let seen: HashSet<String> = (0..400).map(|_| generator.generate("p")).collect();
        assert_eq!(seen.len(), DEFAULT_CANNED_RESPONSES.len());
    }

    #[test]
    fn override_replaces_canned_set() {
        let generator = CannedResponseGenerator::seeded(3)
            .with_responses(vec!["Only answer.".to_string()]);
        assert_eq!(generator.generate("x"), format!("Only answer.{STUB_MARKER}"));
    }

    #[test]
    fn empty_override_is_ignored() {
        let generator = CannedResponseGenerator::seeded(3).with_responses(Vec::new());
        assert_eq!(generator.responses().len(), DEFAULT_CANNED_RESPONSES.len());
    }
}
