//! Stub tools and the canned response generator used by the EduBuddy agent.
//!
//! Every tool here fabricates its output locally. Nothing touches the
//! network or a real model.

pub mod builtins;
pub mod generator;

/// Built-in tool functions and their defaults.
pub use builtins::{
    DEFAULT_QUIZ_QUESTIONS, DEFAULT_SEARCH_TOP_K, code_execute, code_execute_with,
    quiz_generator, web_search,
};
/// Response generator interface and canned implementation.
pub use generator::{
    CannedResponseGenerator, DEFAULT_CANNED_RESPONSES, ResponseGenerator, STUB_MARKER,
};
