// ABOUTME: Application context wiring configuration, storage, language state, gateway and controllers
// ABOUTME: One explicit dependency container shared by the HTTP server and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! Dependency injection context
//!
//! [`AppContext`] is built once at startup and cloned cheaply into every
//! handler. It owns no global state: the active language lives in the
//! [`LanguageContext`] handle it carries.

use std::sync::Arc;

use tracing::info;

use crate::config::AppConfig;
use crate::controllers::{
    ChatController, DietController, ExerciseController, FunFactController, TrackerController,
};
use crate::errors::AppResult;
use crate::gateway::AiGateway;
use crate::language::LanguageContext;
use crate::llm::{GeminiProvider, LlmProvider};
use crate::storage::Storage;

/// Composed application context
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    storage: Storage,
    language: LanguageContext,
    gateway: AiGateway,
    tracker: Arc<TrackerController>,
    chat: Arc<ChatController>,
    diet: Arc<DietController>,
    exercise: Arc<ExerciseController>,
    fun_fact: Arc<FunFactController>,
}

impl AppContext {
    /// Build storage and the Gemini provider from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the store file cannot be opened
    pub fn from_config(config: AppConfig) -> AppResult<Self> {
        let storage = Storage::new(&config.storage)?;
        let provider: Arc<dyn LlmProvider> = Arc::new(GeminiProvider::from_config(&config.gemini));
        info!(
            storage = storage.backend_name(),
            provider = provider.name(),
            model = %config.gemini.model,
            "Application context ready"
        );
        Ok(Self::new(config, storage, provider))
    }

    /// Wire the context from already-built parts
    #[must_use]
    pub fn new(config: AppConfig, storage: Storage, provider: Arc<dyn LlmProvider>) -> Self {
        let language = LanguageContext::new(config.default_language);
        let gateway = AiGateway::new(provider);
        Self {
            tracker: Arc::new(TrackerController::new(
                &storage,
                gateway.clone(),
                language.clone(),
            )),
            chat: Arc::new(ChatController::new(&storage, gateway.clone(), language.clone())),
            diet: Arc::new(DietController::new(&storage, gateway.clone(), language.clone())),
            exercise: Arc::new(ExerciseController::new(
                &storage,
                gateway.clone(),
                language.clone(),
            )),
            fun_fact: Arc::new(FunFactController::new(gateway.clone(), language.clone())),
            config: Arc::new(config),
            storage,
            language,
            gateway,
        }
    }

    /// Replace the tracker controller, e.g. to inject a fixed date source
    #[must_use]
    pub fn with_tracker(mut self, tracker: TrackerController) -> Self {
        self.tracker = Arc::new(tracker);
        self
    }

    /// Configuration
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Key-value storage
    #[must_use]
    pub const fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Active language handle
    #[must_use]
    pub const fn language(&self) -> &LanguageContext {
        &self.language
    }

    /// AI gateway
    #[must_use]
    pub const fn gateway(&self) -> &AiGateway {
        &self.gateway
    }

    /// Health tracker
    #[must_use]
    pub fn tracker(&self) -> Arc<TrackerController> {
        Arc::clone(&self.tracker)
    }

    /// Symptom chat
    #[must_use]
    pub fn chat(&self) -> Arc<ChatController> {
        Arc::clone(&self.chat)
    }

    /// Diet planner
    #[must_use]
    pub fn diet(&self) -> Arc<DietController> {
        Arc::clone(&self.diet)
    }

    /// Exercise planner
    #[must_use]
    pub fn exercise(&self) -> Arc<ExerciseController> {
        Arc::clone(&self.exercise)
    }

    /// Fun fact banner
    #[must_use]
    pub fn fun_fact(&self) -> Arc<FunFactController> {
        Arc::clone(&self.fun_fact)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("storage", &self.storage)
            .field("language", &self.language.current())
            .field("gateway", &self.gateway)
            .finish_non_exhaustive()
    }
}
