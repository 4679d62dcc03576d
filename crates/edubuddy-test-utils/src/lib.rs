//! Test helpers shared across EduBuddy crates.

pub mod generator;
pub mod memory;

pub use generator::{FixedGenerator, RecordingGenerator};
pub use memory::temp_store;
