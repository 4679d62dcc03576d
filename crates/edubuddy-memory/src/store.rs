//! Memory store interface and the JSON file implementation.
//!
//! Every mutation rewrites the whole backing file in place. There is no
//! atomic rename and no cross-process locking: two processes sharing one
//! file race on the read-modify-write cycle and the last writer wins.

use crate::error::MemoryError;
use crate::model::{MemoryDocument, SessionRecord, UserRecord};
use log::{debug, info};
use parking_lot::Mutex;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Memory bank abstraction used by the agent.
pub trait MemoryStore: Send + Sync {
    /// Register a user if absent. Idempotent.
    fn ensure_user(&self, user_id: &str) -> Result<(), MemoryError>;

    /// Append a committed session to a user's history.
    fn append_session(&self, user_id: &str, session: SessionRecord) -> Result<(), MemoryError>;

    /// Set a long-term fact for a user, replacing any previous value.
    fn set_fact(&self, user_id: &str, key: &str, value: Value) -> Result<(), MemoryError>;

    /// Look up a user record.
    fn get_user(&self, user_id: &str) -> Option<UserRecord>;

    /// Look up a single long-term fact.
    fn get_fact(&self, user_id: &str, key: &str) -> Option<Value> {
        self.get_user(user_id)
            .and_then(|user| user.long_term.get(key).cloned())
    }

    /// Write the current state to durable storage.
    fn flush(&self) -> Result<(), MemoryError>;
}

/// Memory store backed by a single pretty-printed JSON file.
#[derive(Debug)]
pub struct JsonFileMemoryStore {
    /// Backing file.
    path: PathBuf,
    /// In-memory copy of the whole document.
    document: Mutex<MemoryDocument>,
}

impl JsonFileMemoryStore {
    /// Open the store at `path`, creating an empty document if the file is missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, MemoryError> {
        let path = path.as_ref().to_path_buf();
        if path.exists() {
            let bytes = fs::read(&path)?;
            let document: MemoryDocument =
                serde_json::from_slice(&bytes).map_err(|source| MemoryError::CorruptStore {
                    path: path.clone(),
                    source,
                })?;
            info!(
                "opened memory store (path={}, users={})",
                path.display(),
                document.users.len()
            );
            return Ok(Self {
                path,
                document: Mutex::new(document),
            });
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let store = Self {
            path,
            document: Mutex::new(MemoryDocument::default()),
        };
        store.flush()?;
        info!("initialized empty memory store (path={})", store.path.display());
        Ok(store)
    }

    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Snapshot of the whole document.
    pub fn document(&self) -> MemoryDocument {
        self.document.lock().clone()
    }

    fn persist(&self, document: &MemoryDocument) -> Result<(), MemoryError> {
        let mut contents = serde_json::to_string_pretty(document)?;
        contents.push('\n');
        fs::write(&self.path, contents)?;
        debug!(
            "memory store written (path={}, users={})",
            self.path.display(),
            document.users.len()
        );
        Ok(())
    }

    /// Apply `change` to a copy of the document and adopt it once written.
    ///
    /// A failed write leaves the in-memory document untouched.
    fn update<T>(&self, change: impl FnOnce(&mut MemoryDocument) -> T) -> Result<T, MemoryError> {
        let mut document = self.document.lock();
        let mut next = document.clone();
        let result = change(&mut next);
        self.persist(&next)?;
        *document = next;
        Ok(result)
    }
}

impl MemoryStore for JsonFileMemoryStore {
    fn ensure_user(&self, user_id: &str) -> Result<(), MemoryError> {
        if self.document.lock().users.contains_key(user_id) {
            return Ok(());
        }
        self.update(|document| {
            document.users.entry(user_id.to_string()).or_default();
        })?;
        info!("registered user (user_id={user_id})");
        Ok(())
    }

    fn append_session(&self, user_id: &str, session: SessionRecord) -> Result<(), MemoryError> {
        let action_count = session.actions.len();
        let sessions = self.update(|document| {
            let user = document.users.entry(user_id.to_string()).or_default();
            user.sessions.push(session);
            user.sessions.len()
        })?;
        info!(
            "appended session (user_id={user_id}, sessions={sessions}, actions={action_count})"
        );
        Ok(())
    }

    fn set_fact(&self, user_id: &str, key: &str, value: Value) -> Result<(), MemoryError> {
        self.update(|document| {
            document
                .users
                .entry(user_id.to_string())
                .or_default()
                .long_term
                .insert(key.to_string(), value);
        })?;
        debug!("set long-term fact (user_id={user_id}, key={key})");
        Ok(())
    }

    fn get_user(&self, user_id: &str) -> Option<UserRecord> {
        self.document.lock().users.get(user_id).cloned()
    }

    fn flush(&self) -> Result<(), MemoryError> {
        let document = self.document.lock();
        self.persist(&document)
    }
}
