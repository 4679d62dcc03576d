//! Action records appended to a session by the agent.
//!
//! On the wire an action is a flat JSON object with a `type` discriminator
//! next to its payload fields. Known types decode into typed payloads; any
//! other object with a string `type` is kept verbatim in [`ActionRecord::Other`]
//! so files written by newer tools survive a load/save cycle.

use crate::SearchHit;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const TYPE_KEY: &str = "type";

/// A single logged agent action.
///
/// Two actions are equal when they write the same JSON object, so a raw
/// [`ActionRecord::Other`] equals the typed variant it decodes into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub enum ActionRecord {
    /// Material was summarized through the response generator.
    Summarize(SummarizeAction),
    /// Flashcards were generated from a summary.
    Flashcards(FlashcardsAction),
    /// A quiz was generated for a topic.
    Quiz(QuizAction),
    /// A web search was run.
    WebSearch(WebSearchAction),
    /// Final result summary for the request.
    FinalOutput(FinalOutputAction),
    /// Any other action, carried as raw fields.
    Other {
        kind: String,
        fields: Map<String, Value>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SummarizeAction {
    pub prompt: String,
    pub result_preview: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlashcardsAction {
    pub prompt: String,
    pub result_preview: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizAction {
    pub topic: String,
    /// Number of questions requested.
    pub n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSearchAction {
    pub query: String,
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FinalOutputAction {
    pub summary: String,
    pub num_flashcards: usize,
    pub quiz_len: usize,
}

impl ActionRecord {
    /// Build an action from a discriminator and its payload fields.
    ///
    /// A built-in kind whose fields fit the typed payload becomes that typed
    /// variant. A `type` entry inside `fields` is ignored in favor of `kind`.
    pub fn custom(kind: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self::from_parts(kind.into(), fields)
    }

    fn from_parts(kind: String, mut fields: Map<String, Value>) -> Self {
        fields.remove(TYPE_KEY);
        let known = match kind.as_str() {
            "summarize" => decode(&fields).map(Self::Summarize),
            "flashcards" => decode(&fields).map(Self::Flashcards),
            "quiz" => decode(&fields).map(Self::Quiz),
            "web_search" => decode(&fields).map(Self::WebSearch),
            "final_output" => decode(&fields).map(Self::FinalOutput),
            _ => None,
        };
        // Known kinds with an unexpected shape are kept raw rather than rejected.
        known.unwrap_or(Self::Other { kind, fields })
    }

    /// Build a `final_output` action.
    pub fn final_output(summary: impl Into<String>, num_flashcards: usize, quiz_len: usize) -> Self {
        Self::FinalOutput(FinalOutputAction {
            summary: summary.into(),
            num_flashcards,
            quiz_len,
        })
    }

    /// The `type` discriminator written to disk.
    pub fn kind(&self) -> &str {
        match self {
            Self::Summarize(_) => "summarize",
            Self::Flashcards(_) => "flashcards",
            Self::Quiz(_) => "quiz",
            Self::WebSearch(_) => "web_search",
            Self::FinalOutput(_) => "final_output",
            Self::Other { kind, .. } => kind,
        }
    }

    /// Render the action as its flat JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(Map::from(self.clone()))
    }
}

impl TryFrom<Map<String, Value>> for ActionRecord {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let kind = match fields.remove(TYPE_KEY) {
            Some(Value::String(kind)) => kind,
            Some(other) => return Err(format!("action `type` must be a string, got {other}")),
            None => return Err("action is missing the `type` field".to_string()),
        };
        Ok(Self::from_parts(kind, fields))
    }
}

impl From<ActionRecord> for Map<String, Value> {
    fn from(action: ActionRecord) -> Self {
        let kind = action.kind().to_string();
        let payload = match action {
            ActionRecord::Summarize(payload) => encode(&payload),
            ActionRecord::Flashcards(payload) => encode(&payload),
            ActionRecord::Quiz(payload) => encode(&payload),
            ActionRecord::WebSearch(payload) => encode(&payload),
            ActionRecord::FinalOutput(payload) => encode(&payload),
            ActionRecord::Other { fields, .. } => fields,
        };
        let mut map = payload;
        map.insert(TYPE_KEY.to_string(), Value::String(kind));
        map
    }
}

impl PartialEq for ActionRecord {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Summarize(a), Self::Summarize(b)) => a == b,
            (Self::Flashcards(a), Self::Flashcards(b)) => a == b,
            (Self::Quiz(a), Self::Quiz(b)) => a == b,
            (Self::WebSearch(a), Self::WebSearch(b)) => a == b,
            (Self::FinalOutput(a), Self::FinalOutput(b)) => a == b,
            _ => self.to_value() == other.to_value(),
        }
    }
}

fn decode<T: DeserializeOwned>(fields: &Map<String, Value>) -> Option<T> {
    serde_json::from_value(Value::Object(fields.clone())).ok()
}

fn encode<T: Serialize>(payload: &T) -> Map<String, Value> {
    match serde_json::to_value(payload) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
