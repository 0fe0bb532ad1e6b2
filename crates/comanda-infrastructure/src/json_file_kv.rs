//! File-backed durable key-value store.
//!
//! One JSON document per store file: a string→value map holding the
//! persisted session and cart. Writes are atomic (tmp file + fsync + rename)
//! behind an exclusive file lock, so a crash mid-write never leaves a
//! half-written document.
//!
//! Per the [`KeyValueStore`] contract nothing here ever returns an error:
//! unreadable or corrupt content degrades to "key absent" and failed writes
//! are logged and dropped.

use comanda_core::kv::KeyValueStore;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// A [`KeyValueStore`] persisting to a single JSON file.
pub struct JsonFileKeyValueStore {
    path: PathBuf,
}

impl JsonFileKeyValueStore {
    /// Creates a store over the given file path.
    ///
    /// The file (and its parent directory) is created lazily on first write.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the whole document, degrading to an empty map on any failure.
    fn load(&self) -> BTreeMap<String, Value> {
        if !self.path.exists() {
            return BTreeMap::new();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "storage read failed, using empty document");
                return BTreeMap::new();
            }
        };
        if content.trim().is_empty() {
            return BTreeMap::new();
        }
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "storage document corrupt, using empty document");
                BTreeMap::new()
            }
        }
    }

    /// Writes the whole document atomically: tmp file, fsync, rename.
    fn save(&self, map: &BTreeMap<String, Value>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(map)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let tmp_path = self.temp_path();
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "storage.json".to_string());
        match self.path.parent() {
            Some(parent) => parent.join(format!(".{}.tmp", file_name)),
            None => PathBuf::from(format!(".{}.tmp", file_name)),
        }
    }

    fn acquire_lock(&self) -> Option<FileLock> {
        match FileLock::acquire(&self.path) {
            Ok(lock) => Some(lock),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "storage lock failed, writing unlocked");
                None
            }
        }
    }
}

impl KeyValueStore for JsonFileKeyValueStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.load().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) {
        // Read-modify-write under the lock; last write wins across handles.
        let _lock = self.acquire_lock();
        let mut map = self.load();
        map.insert(key.to_string(), value);
        if let Err(err) = self.save(&map) {
            tracing::warn!(path = %self.path.display(), key, %err, "storage write failed, value dropped");
        }
    }
}

/// A file lock guard released on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> std::io::Result<Self> {
        let lock_path = path.with_extension("lock");
        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped.
        let _ = fs::remove_file(&self.lock_path);
    }
}
