//! Durable key-value store trait.
//!
//! The browser-local storage of the original environment is modelled as a
//! narrow synchronous collaborator: string keys, JSON values, and a contract
//! that no failure ever reaches the caller. Implementations swallow read and
//! write problems (corruption, quota, serialization) and degrade to "value
//! absent"; the runtime then falls back to its documented defaults.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A durable string-keyed JSON store with last-write-wins semantics.
///
/// By contract, neither operation may return an error to the caller.
/// Implementations log and continue instead.
pub trait KeyValueStore: Send + Sync {
    /// Reads the raw value stored under `key`, or `None` when the key is
    /// missing or the stored bytes are unreadable.
    fn get(&self, key: &str) -> Option<serde_json::Value>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: serde_json::Value);
}

/// Typed convenience layer over [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Reads and deserializes the value under `key`, falling back to
    /// `fallback` when the key is absent or the value does not conform.
    ///
    /// No versioning field exists in the stored layout; any non-conforming
    /// value is treated as absent.
    fn get_or<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        match self.get(key) {
            Some(raw) => serde_json::from_value(raw).unwrap_or(fallback),
            None => fallback,
        }
    }

    /// Serializes and stores `value` under `key`.
    ///
    /// A value that fails to serialize is dropped silently, per the
    /// never-throws contract of this collaborator.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(raw) => self.set(key, raw),
            Err(err) => {
                tracing::warn!(key, %err, "dropping unserializable value");
            }
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}
