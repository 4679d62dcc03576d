use edubuddy_memory::JsonFileMemoryStore;
use std::sync::Arc;
use tempfile::TempDir;

/// File name used for stores created by [`temp_store`].
pub const TEMP_STORE_FILE: &str = "memory_bank.json";

/// Open a fresh JSON store inside a new temp dir.
///
/// Keep the returned `TempDir` alive for as long as the store is used.
pub fn temp_store() -> (TempDir, Arc<JsonFileMemoryStore>) {
    let temp = TempDir::new().expect("tempdir");
    let store = JsonFileMemoryStore::open(temp.path().join(TEMP_STORE_FILE)).expect("open store");
    (temp, Arc::new(store))
}
