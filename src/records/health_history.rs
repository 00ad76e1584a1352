// ABOUTME: Health Record Store, the durable date-ordered list of HealthEntry values
// ABOUTME: Appends keep a stable ascending date order; clearing also drops cached advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use tracing::{debug, info};

use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::language::Language;
use crate::models::HealthEntry;
use crate::storage::Storage;

/// Durable, append-only health history
///
/// Invariant: the persisted list is sorted ascending by date, and entries
/// sharing a date keep insertion order. The latest entry is the last one.
#[derive(Debug, Clone)]
pub struct HealthRecordStore {
    storage: Storage,
}

impl HealthRecordStore {
    /// Store over `storage`
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Read the full history
    ///
    /// A corrupted value is removed and an empty list is returned.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails
    pub fn load(&self) -> AppResult<Vec<HealthEntry>> {
        Ok(self
            .storage
            .get_json_or_discard(storage_keys::HEALTH_HISTORY)?
            .unwrap_or_default())
    }

    /// Insert `entry`, re-sort by date, persist and return the new history
    ///
    /// No deduplication by date is performed.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be written
    pub fn append(&self, entry: HealthEntry) -> AppResult<Vec<HealthEntry>> {
        let mut history = self.load()?;
        history.push(entry);
        history.sort_by_key(|e| e.date);
        self.replace(&history)?;
        debug!(entries = history.len(), "Health entry appended");
        Ok(history)
    }

    /// Most recent entry, if any
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails
    pub fn latest(&self) -> AppResult<Option<HealthEntry>> {
        Ok(self.load()?.pop())
    }

    /// Remove the history and the advice cache for every language
    ///
    /// # Errors
    ///
    /// Returns an error if a key cannot be removed
    pub fn clear(&self) -> AppResult<()> {
        self.storage.remove(storage_keys::HEALTH_HISTORY)?;
        for language in Language::ALL {
            self.storage.remove(&language.advice_storage_key())?;
        }
        info!("Health history and cached advice cleared");
        Ok(())
    }

    /// Persist `history`, erasing all derived keys when it is empty
    fn replace(&self, history: &[HealthEntry]) -> AppResult<()> {
        if history.is_empty() {
            return self.clear();
        }
        self.storage.set_json(storage_keys::HEALTH_HISTORY, history)
    }
}
