// ABOUTME: Symptom chat controller appending user and AI messages around one analysis call
// ABOUTME: Failed analyses still leave an AI message in the transcript explaining the failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use tracing::info;

use super::RequestSlot;
use crate::errors::{AppError, AppResult};
use crate::gateway::AiGateway;
use crate::language::{LanguageContext, Message};
use crate::models::ChatMessage;
use crate::records::ChatHistoryStore;
use crate::storage::Storage;

/// Symptom chat controller
#[derive(Debug)]
pub struct ChatController {
    store: ChatHistoryStore,
    gateway: AiGateway,
    language: LanguageContext,
    slot: RequestSlot,
}

impl ChatController {
    /// Controller over `storage`
    #[must_use]
    pub fn new(storage: &Storage, gateway: AiGateway, language: LanguageContext) -> Self {
        Self {
            store: ChatHistoryStore::new(storage.clone()),
            gateway,
            language,
            slot: RequestSlot::new("symptom analysis"),
        }
    }

    /// Full transcript
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails
    pub fn history(&self) -> AppResult<Vec<ChatMessage>> {
        self.store.load()
    }

    /// Delete the transcript
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be removed
    pub fn clear(&self) -> AppResult<()> {
        self.store.clear()
    }

    /// Send one symptom description and return the AI reply
    ///
    /// # Errors
    ///
    /// - `PreconditionFailed` for blank input; nothing is appended
    /// - `ResourceLocked` while a previous message is still being analyzed
    /// - `ExternalServiceError` when analysis fails; the transcript then ends
    ///   with an AI message carrying the localized failure text
    pub async fn send(&self, input: &str) -> AppResult<ChatMessage> {
        let language = self.language.current();
        let text = input.trim();
        if text.is_empty() {
            return Err(AppError::precondition(
                Message::EmptySymptomsError.text(language),
            ));
        }
        let ticket = self.slot.try_begin()?;

        self.store.append(ChatMessage::user(text))?;
        let result = self.gateway.analyze_symptoms(text, language).await;
        let result = ticket
            .finish(result)
            .ok_or_else(|| AppError::busy(self.slot.feature()))?;

        match result {
            Ok(analysis) => {
                let reply = ChatMessage::ai_with_analysis(
                    Message::AnalysisDisclaimer.text(language),
                    analysis,
                );
                self.store.append(reply.clone())?;
                info!(language = %language, "Symptom analysis added to chat");
                Ok(reply)
            }
            Err(e) => {
                let reply = ChatMessage::ai(format!(
                    "{} {}",
                    Message::AiProcessError.text(language),
                    e.message
                ));
                self.store.append(reply)?;
                Err(e)
            }
        }
    }
}
