//! Core agent primitives for EduBuddy.
//!
//! This crate owns the study agent that drives the tool stubs and the
//! response generator, records each step, and commits the session to the
//! memory bank.

pub mod agent;
pub mod error;

pub use agent::{DEFAULT_FLASHCARDS, EduBuddyAgent};
pub use error::EduBuddyCoreError;
