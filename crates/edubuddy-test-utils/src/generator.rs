use edubuddy_tools::ResponseGenerator;
use parking_lot::Mutex;

/// Generator that always returns the same response.
#[derive(Debug, Clone)]
pub struct FixedGenerator {
    response: String,
}

impl FixedGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl ResponseGenerator for FixedGenerator {
    fn generate(&self, _prompt: &str) -> String {
        self.response.clone()
    }
}

/// Generator that returns a fixed response and records every prompt.
#[derive(Debug, Default)]
pub struct RecordingGenerator {
    response: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts seen so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

impl ResponseGenerator for RecordingGenerator {
    fn generate(&self, prompt: &str) -> String {
        self.prompts.lock().push(prompt.to_string());
        self.response.clone()
    }
}
