//! In-memory key-value store.
//!
//! Drop-in [`KeyValueStore`] for tests and hosts without durable storage.

use comanda_core::kv::KeyValueStore;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// A [`KeyValueStore`] over an in-process map.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    map: Mutex<BTreeMap<String, Value>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a key, for tests that exercise hydration.
    pub fn seed(&self, key: &str, value: Value) {
        self.set(key, value);
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.map
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.map
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value);
    }
}
