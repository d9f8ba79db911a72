//! Flat string-keyed persistence.
//!
//! The original runs against the browser's local storage; here the same
//! contract is a [`KeyValue`] trait with an in-memory backend for tests and
//! a JSON-file backend for real profiles. Values are plain strings: numbers
//! are stringified, structured values are JSON-encoded by the caller.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{error, warn};

/// Flat string-to-string store, one instance per namespace.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    /// Wipe every key in this namespace.
    fn clear(&mut self);
}

/// In-memory store for tests and simulations.
#[derive(Clone, Debug, Default)]
pub struct MemStore {
    entries: BTreeMap<String, String>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// JSON-file-backed store with write-through semantics.
///
/// Every mutation rewrites the backing file, so a crash loses at most the
/// in-flight write. Concurrent processes on the same file are last-writer-wins;
/// there is no cross-process transactional guarantee.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open (or create) the store at `path`.
    ///
    /// A corrupt backing file is recovered by starting from an empty map;
    /// the corruption is logged, never surfaced as a failure.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(path = %path.display(), %err, "corrupt store file, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                return Err(err).context(format!("read store file {}", path.display()));
            }
        };
        Ok(Self { path, entries })
    }

    fn flush(&self) {
        if let Some(dir) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(dir) {
                error!(dir = %dir.display(), %err, "store directory create failed");
                return;
            }
        }
        let data = match serde_json::to_string_pretty(&self.entries) {
            Ok(data) => data,
            Err(err) => {
                error!(%err, "store serialize failed");
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, data) {
            error!(path = %self.path.display(), %err, "store write failed");
        }
    }
}

impl KeyValue for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.flush();
    }
}
