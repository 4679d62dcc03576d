//! Built-in stub tools bundled with EduBuddy.

mod code;
mod quiz;
mod web;

pub use code::{code_execute, code_execute_with};
pub use quiz::{DEFAULT_QUIZ_QUESTIONS, quiz_generator};
pub use web::{DEFAULT_SEARCH_TOP_K, web_search};
