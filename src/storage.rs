// SPDX-License-Identifier: MPL-2.0
//! Persistent key-value store for client-side state.
//!
//! Values are JSON-encoded scalars kept under fixed keys in a single
//! `storage.json` object in the data directory. Every write goes through to
//! disk immediately.
//!
//! Storage is best effort: an unreadable or corrupt file and a directory that
//! cannot be written are logged and otherwise ignored, so callers always get
//! a working in-memory store with default values.
//!
//! `Storage` is a cheap handle; clones share the same underlying map. This is
//! what lets a notification's dismiss callback flip a persisted flag.

use crate::app::paths::{self, DirKind};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.json";

#[derive(Debug, Default)]
struct Inner {
    values: Map<String, Value>,
    /// `None` for purely in-memory stores.
    path: Option<PathBuf>,
}

/// Shared handle to the key-value store.
#[derive(Debug, Clone, Default)]
pub struct Storage {
    inner: Arc<Mutex<Inner>>,
}

impl Storage {
    /// Creates a store that never touches the filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Opens the store in the default data directory.
    #[must_use]
    pub fn open_default() -> Self {
        Self::open_in(None)
    }

    /// Opens the store in `base_dir`, or the resolved data directory.
    #[must_use]
    pub fn open_in(base_dir: Option<PathBuf>) -> Self {
        match paths::resolve(DirKind::Data, base_dir) {
            Some(mut path) => {
                path.push(STORAGE_FILE);
                Self::open(path)
            }
            None => {
                tracing::warn!("no data directory available, preferences will not persist");
                Self::in_memory()
            }
        }
    }

    /// Opens the store backed by the file at `path`.
    ///
    /// A missing file is an empty store. A file that cannot be read or parsed
    /// is logged and replaced on the next write.
    #[must_use]
    pub fn open(path: PathBuf) -> Self {
        let values = if path.exists() {
            match read_map(&path) {
                Ok(values) => values,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring unreadable storage file");
                    Map::new()
                }
            }
        } else {
            Map::new()
        };

        Self {
            inner: Arc::new(Mutex::new(Inner {
                values,
                path: Some(path),
            })),
        }
    }

    /// Reads `key`, returning `None` when it is missing or does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let inner = self.lock();
        inner
            .values
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// Reads `key`, storing and returning `default` when the key is missing
    /// or holds a value that does not decode as `T`.
    pub fn get_or_init<T>(&self, key: &str, default: T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some(value) = self.get(key) {
            return value;
        }
        self.set(key, &default);
        default
    }

    /// Writes `value` under `key` and flushes to disk.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        let encoded = match serde_json::to_value(value) {
            Ok(encoded) => encoded,
            Err(error) => {
                tracing::warn!(key, %error, "failed to encode storage value");
                return;
            }
        };

        let mut inner = self.lock();
        inner.values.insert(key.to_string(), encoded);
        inner.flush();
    }

    /// Removes `key` and flushes to disk.
    pub fn remove(&self, key: &str) {
        let mut inner = self.lock();
        if inner.values.remove(key).is_some() {
            inner.flush();
        }
    }

    /// Returns whether `key` currently holds a value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lock().values.contains_key(key)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    fn flush(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(error) = write_map(path, &self.values) {
            tracing::warn!(path = %path.display(), %error, "failed to persist storage");
        }
    }
}

fn read_map(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&content)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::Storage(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn write_map(path: &Path, values: &Map<String, Value>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(values)?;
    fs::write(path, content)?;
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
