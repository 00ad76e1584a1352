// ABOUTME: LLM provider abstraction used by the AI gateway to reach a text-generation service
// ABOUTME: Defines the single-prompt request/response contract with optional JSON response schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! # LLM Provider Interface
//!
//! Every gateway operation is one prompt and one completion. Structured
//! operations attach a JSON schema which the provider forwards as the
//! model's output contract; the provider itself never interprets the
//! returned text.
//!
//! ```rust,no_run
//! use poramorshok::llm::{GenerationRequest, LlmProvider};
//!
//! async fn example(provider: &dyn LlmProvider) {
//!     let request = GenerationRequest::new("Share one short fact about sleep.");
//!     let response = provider.generate(&request).await;
//! }
//! ```

mod gemini;

pub use gemini::GeminiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppResult;

// ============================================================================
// Request/Response Types
// ============================================================================

/// One prompt sent to a provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    /// Natural-language instruction
    pub prompt: String,
    /// Model identifier; the provider default is used when absent
    pub model: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// JSON schema the response must conform to; requests JSON output when set
    pub response_schema: Option<Value>,
}

impl GenerationRequest {
    /// Create a plain-text request
    #[must_use]
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: None,
            temperature: None,
            max_tokens: None,
            response_schema: None,
        }
    }

    /// Set the model to use
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Request JSON output conforming to `schema`
    #[must_use]
    pub fn with_response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// True when JSON output was requested
    #[must_use]
    pub const fn expects_json(&self) -> bool {
        self.response_schema.is_some()
    }
}

/// Completion returned by a provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    /// Raw generated text
    pub content: String,
    /// Model used for generation
    pub model: String,
    /// Token usage statistics
    pub usage: Option<TokenUsage>,
    /// Finish reason (STOP, MAX_TOKENS, ...)
    pub finish_reason: Option<String>,
}

/// Token usage statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    /// Number of tokens in the prompt
    pub prompt_tokens: u32,
    /// Number of tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens used
    pub total_tokens: u32,
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Text-generation provider
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Unique provider identifier (e.g., "gemini")
    fn name(&self) -> &'static str;

    /// Human-readable display name for the provider
    fn display_name(&self) -> &'static str;

    /// Model used when the request does not name one
    fn default_model(&self) -> &str;

    /// Models this provider is known to serve
    fn available_models(&self) -> &'static [&'static str];

    /// Issue exactly one completion request
    async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationResponse>;

    /// Check that the provider is reachable and the credential is accepted
    async fn health_check(&self) -> AppResult<bool>;
}
