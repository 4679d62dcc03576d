//! Document model persisted by the memory bank.

use edubuddy_protocol::{ActionRecord, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Root persisted object.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MemoryDocument {
    /// Records keyed by user id.
    pub users: BTreeMap<String, UserRecord>,
}

/// Everything remembered about one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    /// Committed sessions, oldest first.
    pub sessions: Vec<SessionRecord>,
    /// Durable key/value facts.
    pub long_term: BTreeMap<String, Value>,
}

/// One interaction between a user and the agent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    /// When the agent was created.
    pub start_time: Timestamp,
    /// When the session was committed; absent before commit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<Timestamp>,
    /// Actions in the order they were logged.
    pub actions: Vec<ActionRecord>,
}

impl SessionRecord {
    /// Start an empty, open session.
    pub fn new(start_time: Timestamp) -> Self {
        Self {
            start_time,
            end_time: None,
            actions: Vec::new(),
        }
    }
}
