// ABOUTME: JSON-file key-value store for the user's local data directory
// ABOUTME: Keeps an in-memory mirror and rewrites the file atomically after every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, info, warn};

use super::memory::InMemoryStore;
use super::KeyValueStore;
use crate::errors::{AppError, AppResult};

/// Store persisted as a single JSON object `{ key: value }`
///
/// An unreadable file is moved aside to `<name>.corrupt` and the store starts
/// empty; the same fail-soft rule the record stores apply per key.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    mirror: InMemoryStore,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open or create the store at `path`
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but cannot be read.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::storage(format!("Cannot create {}: {e}", parent.display()))
                    .with_source(e)
            })?;
        }

        let entries = Self::read_entries(&path)?;
        info!(path = %path.display(), keys = entries.len(), "Opened local store");

        Ok(Self {
            path,
            mirror: InMemoryStore::with_entries(entries),
            write_lock: Mutex::new(()),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> AppResult<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(
                    AppError::storage(format!("Cannot read {}: {e}", path.display()))
                        .with_source(e),
                )
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_json::from_str(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let quarantine = path.with_extension("json.corrupt");
                warn!(
                    path = %path.display(),
                    quarantine = %quarantine.display(),
                    error = %e,
                    "Local store is unreadable, starting empty"
                );
                fs::rename(path, &quarantine)?;
                Ok(BTreeMap::new())
            }
        }
    }

    fn persist(&self) -> AppResult<()> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| AppError::internal("Local store write lock poisoned"))?;

        let snapshot: BTreeMap<String, String> = self.mirror.snapshot().into_iter().collect();
        let json = serde_json::to_string_pretty(&snapshot)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), keys = snapshot.len(), "Local store flushed");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.mirror.get(key)
    }

    fn set(&self, key: &str, value: String) -> AppResult<()> {
        self.mirror.set(key, value)?;
        self.persist()
    }

    fn remove(&self, key: &str) -> AppResult<bool> {
        let existed = self.mirror.remove(key)?;
        if existed {
            self.persist()?;
        }
        Ok(existed)
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        self.mirror.keys()
    }
}
