//! Memory bank persistence integration tests.

use edubuddy_memory::{JsonFileMemoryStore, MemoryStore, SessionRecord};
use edubuddy_protocol::{ActionRecord, QuizAction, SummarizeAction};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;

fn sample_session(start_time: f64) -> SessionRecord {
    SessionRecord {
        start_time,
        end_time: Some(start_time + 1.0),
        actions: vec![
            ActionRecord::Summarize(SummarizeAction {
                prompt: "Summarize this".to_string(),
                result_preview: "Sure".to_string(),
            }),
            ActionRecord::Quiz(QuizAction {
                topic: "Probability".to_string(),
                n: 5,
            }),
            ActionRecord::final_output("Sure", 8, 5),
        ],
    }
}

/// Reopening the same path yields the document built through mutations.
#[test]
fn reopened_store_matches_written_document() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("memory_bank.json");

    let store = JsonFileMemoryStore::open(&path).expect("open");
    store.ensure_user("u1").expect("ensure");
    store
        .append_session("u1", sample_session(1_700_000_000.25))
        .expect("append");
    store
        .set_fact("u2", "favorite_topic", json!({ "name": "Statistics", "rank": 1 }))
        .expect("fact");
    let written = store.document();
    drop(store);

    let reopened = JsonFileMemoryStore::open(&path).expect("reopen");
    assert_eq!(reopened.document(), written);
}

/// Each append grows history by one and keeps chronological order.
#[test]
fn sessions_are_append_only() {
    let temp = tempdir().expect("tempdir");
    let store = JsonFileMemoryStore::open(temp.path().join("bank.json")).expect("open");

    for (idx, start) in [10.0, 20.0, 30.0].into_iter().enumerate() {
        let session = sample_session(start);
        store
            .append_session("u1", session.clone())
            .expect("append");
        let user = store.get_user("u1").expect("user");
        assert_eq!(user.sessions.len(), idx + 1);
        assert_eq!(user.sessions.last(), Some(&session));
    }

    let starts: Vec<f64> = store
        .get_user("u1")
        .expect("user")
        .sessions
        .iter()
        .map(|session| session.start_time)
        .collect();
    assert_eq!(starts, vec![10.0, 20.0, 30.0]);
}

/// Minimal sessions with integer timestamps survive a reload.
#[test]
fn minimal_session_round_trips() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("bank.json");
    let store = JsonFileMemoryStore::open(&path).expect("open");
    let session: SessionRecord =
        serde_json::from_value(json!({ "start_time": 1, "end_time": 2, "actions": [] }))
            .expect("session");

    store
        .append_session("u1", session.clone())
        .expect("append");
    assert_eq!(store.get_user("u1").expect("user").sessions, vec![session.clone()]);

    let reopened = JsonFileMemoryStore::open(&path).expect("reopen");
    assert_eq!(reopened.get_user("u1").expect("user").sessions, vec![session]);
}

/// Files written by other tools keep unknown actions intact.
#[test]
fn unknown_actions_survive_rewrite() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("bank.json");
    let original = json!({
        "users": {
            "u1": {
                "sessions": [{
                    "start_time": 5.5,
                    "end_time": 6.5,
                    "actions": [{ "type": "code_execute", "code": "x = 1", "success": true }]
                }],
                "long_term": { "goal": "pass exam" }
            }
        }
    });
    std::fs::write(&path, serde_json::to_string_pretty(&original).expect("json")).expect("write");

    let store = JsonFileMemoryStore::open(&path).expect("open");
    store.flush().expect("flush");

    let rewritten: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(rewritten, original);
}

fn object(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

/// Actions built from raw kind/fields pairs compare equal after a reload.
#[test]
fn custom_actions_of_every_kind_survive_reopen() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("bank.json");
    let hit = json!({ "title": "t", "snippet": "s", "url": "u" });
    let actions = vec![
        ActionRecord::custom("summarize", object(json!({ "prompt": "p", "result_preview": "r" }))),
        ActionRecord::custom("flashcards", object(json!({ "prompt": "p", "result_preview": "r" }))),
        ActionRecord::custom("quiz", object(json!({ "topic": "t", "n": 5 }))),
        ActionRecord::custom("web_search", object(json!({ "query": "q", "hits": [hit] }))),
        ActionRecord::custom(
            "final_output",
            object(json!({ "summary": "s", "num_flashcards": 8, "quiz_len": 5 })),
        ),
        ActionRecord::custom("quiz", object(json!({ "topic": "t", "n": "five" }))),
        ActionRecord::custom("note", object(json!({ "type": "other", "text": "hi" }))),
        ActionRecord::Other {
            kind: "final_output".to_string(),
            fields: object(json!({ "summary": "s", "num_flashcards": 1, "quiz_len": 1 })),
        },
    ];
    let session = SessionRecord {
        start_time: 100.0,
        end_time: Some(200.0),
        actions,
    };

    let store = JsonFileMemoryStore::open(&path).expect("open");
    store.append_session("u1", session.clone()).expect("append");
    let written = store.document();
    drop(store);

    let reopened = JsonFileMemoryStore::open(&path).expect("reopen");
    assert_eq!(reopened.document(), written);
    assert_eq!(reopened.get_user("u1").expect("user").sessions, vec![session]);

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(
        on_disk["users"]["u1"]["sessions"][0]["actions"][6],
        json!({ "type": "note", "text": "hi" })
    );
}

/// Full-precision float timestamps are written and read back bit for bit.
#[test]
fn arbitrary_float_timestamps_survive_reopen() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("bank.json");
    let base = 1_760_038_380.565_307_9_f64;
    let sessions: Vec<SessionRecord> = (0..500u64)
        .map(|idx| {
            let start_time = f64::from_bits(base.to_bits() + idx * 7_919);
            SessionRecord {
                start_time,
                end_time: Some(start_time + 0.1 * idx as f64),
                actions: Vec::new(),
            }
        })
        .collect();

    let store = JsonFileMemoryStore::open(&path).expect("open");
    for session in &sessions {
        store.append_session("u1", session.clone()).expect("append");
    }
    drop(store);

    let reopened = JsonFileMemoryStore::open(&path).expect("reopen");
    let loaded = reopened.get_user("u1").expect("user").sessions;
    for (loaded, written) in loaded.iter().zip(&sessions) {
        assert_eq!(loaded.start_time.to_bits(), written.start_time.to_bits());
        assert_eq!(loaded.end_time.map(f64::to_bits), written.end_time.map(f64::to_bits));
    }
    assert_eq!(loaded.len(), sessions.len());
}

/// Hits carrying keys this version does not know are kept on rewrite.
#[test]
fn search_hits_with_extra_keys_survive_rewrite() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("bank.json");
    let original = json!({
        "users": {
            "u1": {
                "sessions": [{
                    "start_time": 1.5,
                    "actions": [{
                        "type": "web_search",
                        "query": "q",
                        "hits": [{ "title": "t", "snippet": "s", "url": "u", "rank": 1 }]
                    }]
                }],
                "long_term": {}
            }
        }
    });
    std::fs::write(&path, serde_json::to_string_pretty(&original).expect("json")).expect("write");

    let store = JsonFileMemoryStore::open(&path).expect("open");
    store.flush().expect("flush");

    let rewritten: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
    assert_eq!(rewritten["users"]["u1"]["sessions"][0]["actions"][0]["hits"][0]["rank"], 1);
    assert_eq!(rewritten, original);
}
