// ABOUTME: Profile store holding the user's age as entered in the tracker form
// ABOUTME: The raw text is kept so the form can be refilled exactly as typed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::storage::Storage;

/// Persisted profile fields
#[derive(Debug, Clone)]
pub struct ProfileStore {
    storage: Storage,
}

impl ProfileStore {
    /// Store over `storage`
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Age text as last entered, if any
    ///
    /// Values written by older builds as bare text are accepted as-is.
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails
    pub fn age_text(&self) -> AppResult<Option<String>> {
        let Some(raw) = self.storage.get_raw(storage_keys::USER_AGE)? else {
            return Ok(None);
        };
        let text = serde_json::from_str::<String>(&raw).unwrap_or(raw);
        let text = text.trim();
        Ok((!text.is_empty()).then(|| text.to_owned()))
    }

    /// Age in whole years, ignoring text that is not a positive integer
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails
    pub fn age(&self) -> AppResult<Option<u32>> {
        Ok(self.age_text()?.as_deref().and_then(parse_age))
    }

    /// Remember the age text; empty text removes it
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub fn set_age(&self, text: &str) -> AppResult<()> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            self.storage.remove(storage_keys::USER_AGE)?;
            return Ok(());
        }
        self.storage.set_json(storage_keys::USER_AGE, trimmed)
    }
}

/// Parse the leading integer of `text` as a positive age
#[must_use]
pub fn parse_age(text: &str) -> Option<u32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok().filter(|age| *age > 0)
}
