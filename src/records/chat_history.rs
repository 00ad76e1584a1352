// ABOUTME: Persistent symptom chat transcript stored under the chatHistory key
// ABOUTME: Append-only list of ChatMessage values with fail-soft loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use crate::constants::storage_keys;
use crate::errors::AppResult;
use crate::models::ChatMessage;
use crate::storage::Storage;

/// Chat transcript store
#[derive(Debug, Clone)]
pub struct ChatHistoryStore {
    storage: Storage,
}

impl ChatHistoryStore {
    /// Store over `storage`
    #[must_use]
    pub const fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Full transcript, empty if absent or corrupted
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails
    pub fn load(&self) -> AppResult<Vec<ChatMessage>> {
        Ok(self
            .storage
            .get_json_or_discard(storage_keys::CHAT_HISTORY)?
            .unwrap_or_default())
    }

    /// Append one message and return the transcript
    ///
    /// # Errors
    ///
    /// Returns an error if the transcript cannot be written
    pub fn append(&self, message: ChatMessage) -> AppResult<Vec<ChatMessage>> {
        let mut messages = self.load()?;
        messages.push(message);
        self.storage.set_json(storage_keys::CHAT_HISTORY, &messages)?;
        Ok(messages)
    }

    /// Delete the transcript
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be removed
    pub fn clear(&self) -> AppResult<()> {
        self.storage.remove(storage_keys::CHAT_HISTORY)?;
        Ok(())
    }
}
