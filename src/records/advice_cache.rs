// ABOUTME: Per-language cache of the latest AI health advice payload
// ABOUTME: Stored under healthAdvice_<lang>; stale-language entries are acceptable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use crate::errors::AppResult;
use crate::language::Language;
use crate::models::HealthAdvice;
use crate::storage::Storage;

/// Cached advice keyed by language
#[derive(Debug, Clone)]
pub struct AdviceCache {
    storage: Storage,
}

impl AdviceCache {
    /// Cache over `storage`
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Cached advice for `language`; a corrupted entry is removed and reported as a miss
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails
    pub fn get(&self, language: Language) -> AppResult<Option<HealthAdvice>> {
        self.storage
            .get_json_or_discard(&language.advice_storage_key())
    }

    /// Replace the cached advice for `language`
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub fn put(&self, language: Language, advice: &HealthAdvice) -> AppResult<()> {
        self.storage.set_json(&language.advice_storage_key(), advice)
    }

    /// Drop the cached advice for `language`
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be removed
    pub fn invalidate(&self, language: Language) -> AppResult<()> {
        self.storage.remove(&language.advice_storage_key())?;
        Ok(())
    }
}
