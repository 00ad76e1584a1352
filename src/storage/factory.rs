// ABOUTME: Storage facade choosing a key-value backend from configuration
// ABOUTME: Adds typed JSON helpers with fail-soft recovery of corrupted values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use super::{file::FileStore, memory::InMemoryStore, KeyValueStore};
use crate::config::{StorageBackend, StorageConfig};
use crate::errors::AppResult;
use crate::logging::AppLogger;

/// Shared handle to the configured key-value backend
#[derive(Clone)]
pub struct Storage {
    inner: Arc<dyn KeyValueStore>,
}

impl Storage {
    /// Open the backend described by `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the file backend cannot be opened
    pub fn new(config: &StorageConfig) -> AppResult<Self> {
        info!(backend = %config.backend, "Initializing local storage");
        match config.backend {
            StorageBackend::Memory => Ok(Self::in_memory()),
            StorageBackend::File => Ok(Self::from_provider(FileStore::open(config.store_path())?)),
        }
    }

    /// Fresh in-memory storage
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_provider(InMemoryStore::new())
    }

    /// Wrap an arbitrary backend
    #[must_use]
    pub fn from_provider(provider: impl KeyValueStore + 'static) -> Self {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Backend name
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.inner.backend_name()
    }

    /// Read a raw value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn get_raw(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    /// Write a raw value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    pub fn set_raw(&self, key: &str, value: impl Into<String>) -> AppResult<()> {
        self.inner.set(key, value.into())
    }

    /// Remove a value, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    pub fn remove(&self, key: &str) -> AppResult<bool> {
        self.inner.remove(key)
    }

    /// All keys currently present
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    pub fn keys(&self) -> AppResult<Vec<String>> {
        self.inner.keys()
    }

    /// Serialize `value` as JSON under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)?;
        self.inner.set(key, json)
    }

    /// Read and decode the JSON value under `key`
    ///
    /// A value that does not decode is removed and reported as absent, so a
    /// corrupted entry never outlives the first read.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself fails
    pub fn get_json_or_discard<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.inner.get(key)? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                AppLogger::log_storage_recovery(key, &e);
                self.inner.remove(key)?;
                Ok(None)
            }
        }
    }
}

impl Debug for Storage {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Storage")
            .field("backend", &self.inner.backend_name())
            .finish()
    }
}
