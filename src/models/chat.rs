// ABOUTME: Chat transcript message model persisted under the chatHistory key
// ABOUTME: AI messages may carry the structured symptom analysis they were produced from
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use serde::{Deserialize, Serialize};

use super::ai::SymptomAnalysis;

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The person using the app
    User,
    /// The assistant
    Ai,
}

/// One message in the symptom chat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author
    pub sender: Sender,
    /// Display text
    pub text: String,
    /// Structured analysis attached to successful AI replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<SymptomAnalysis>,
}

impl ChatMessage {
    /// Message typed by the user
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            analysis: None,
        }
    }

    /// Plain assistant reply
    #[must_use]
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
            analysis: None,
        }
    }

    /// Assistant reply carrying an analysis
    #[must_use]
    pub fn ai_with_analysis(text: impl Into<String>, analysis: SymptomAnalysis) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
            analysis: Some(analysis),
        }
    }
}
