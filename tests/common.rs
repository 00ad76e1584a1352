// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, a scripted mock LLM provider and health data fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
//! Shared test utilities for `poramorshok`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use poramorshok::{
    config::AppConfig,
    context::AppContext,
    controllers::TrackerController,
    errors::{AppError, AppResult, ErrorCode},
    language::Language,
    llm::{GenerationRequest, GenerationResponse, LlmProvider},
    models::HealthEntry,
    storage::Storage,
};
use serde_json::{json, Value};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

// ============================================================================
// Mock LLM Provider
// ============================================================================

/// One scripted provider reply
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Successful completion with this text
    Text(String),
    /// Failure with this code
    Fail(ErrorCode),
}

/// Provider that replays scripted replies and counts calls
///
/// When the script runs out, the fallback reply (if any) is repeated;
/// without a fallback the call fails as unavailable.
#[derive(Debug, Default)]
pub struct MockProvider {
    script: Mutex<VecDeque<Scripted>>,
    fallback: Option<Scripted>,
    delays: Mutex<VecDeque<Duration>>,
    calls: AtomicUsize,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply
    pub fn respond(self, text: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted::Text(text.into()));
        self
    }

    /// Queue a failure
    pub fn fail(self, code: ErrorCode) -> Self {
        self.script.lock().unwrap().push_back(Scripted::Fail(code));
        self
    }

    /// Reply to every unscripted call with `text`
    pub fn always(mut self, text: impl Into<String>) -> Self {
        self.fallback = Some(Scripted::Text(text.into()));
        self
    }

    /// Fail every unscripted call with `code`
    pub fn always_fail(mut self, code: ErrorCode) -> Self {
        self.fallback = Some(Scripted::Fail(code));
        self
    }

    /// Delay the next calls, in order, before they reply
    pub fn with_delays(self, delays: impl IntoIterator<Item = Duration>) -> Self {
        self.delays.lock().unwrap().extend(delays);
        self
    }

    /// Number of `generate` calls made so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Prompt of the most recent request
    pub fn last_prompt(&self) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|request| request.prompt.clone())
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn default_model(&self) -> &str {
        "mock-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["mock-model"]
    }

    async fn generate(&self, request: &GenerationRequest) -> AppResult<GenerationResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fallback.clone());
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match reply {
            Some(Scripted::Text(content)) => Ok(GenerationResponse {
                content,
                model: "mock-model".to_owned(),
                usage: None,
                finish_reason: Some("STOP".to_owned()),
            }),
            Some(Scripted::Fail(code)) => Err(AppError::new(code, "scripted failure")),
            None => Err(AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                "no scripted reply",
            )),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

// ============================================================================
// Context Fixtures
// ============================================================================

/// Date every tracker entry created in tests receives
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// Context over in-memory storage, `provider` and a fixed tracker date
pub fn create_test_context(provider: Arc<MockProvider>) -> Arc<AppContext> {
    create_test_context_with_storage(provider, Storage::in_memory(), Language::En)
}

/// Context over the given storage and starting language
pub fn create_test_context_with_storage(
    provider: Arc<MockProvider>,
    storage: Storage,
    language: Language,
) -> Arc<AppContext> {
    init_test_logging();
    let config = AppConfig {
        default_language: language,
        ..AppConfig::default()
    };
    let context = AppContext::new(config, storage, provider);
    let tracker = TrackerController::new(
        context.storage(),
        context.gateway().clone(),
        context.language().clone(),
    )
    .with_today(Arc::new(fixed_today));
    Arc::new(context.with_tracker(tracker))
}

/// Entry on `date` (`YYYY-MM-DD`)
pub fn entry(date: &str, age: u32, height_cm: f64, weight_kg: f64) -> HealthEntry {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    HealthEntry::new(date, age, height_cm, weight_kg).unwrap()
}

// ============================================================================
// AI Payload Fixtures
// ============================================================================

pub fn advice_value(tag: &str) -> Value {
    json!({
        "dietaryAdvice": [format!("{tag}: eat more vegetables")],
        "exerciseRecommendations": [format!("{tag}: walk 30 minutes daily")],
        "lifestyleSuggestions": [format!("{tag}: sleep 8 hours")]
    })
}

pub fn advice_json(tag: &str) -> String {
    advice_value(tag).to_string()
}

pub fn analysis_json() -> String {
    json!({
        "symptoms": ["Headache", "Mild fever"],
        "causes": ["Viral infection"],
        "treatments": ["Rest", "Hydration"],
        "medications": ["Paracetamol"]
    })
    .to_string()
}

pub fn diet_plan_value(days: usize) -> Value {
    let plan: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "day": format!("Day {day}"),
                "dailyNote": format!("Note for day {day}"),
                "meals": [
                    { "name": "Breakfast", "items": ["Oats", "Banana"] },
                    { "name": "Dinner", "items": ["Rice", "Lentils"] }
                ]
            })
        })
        .collect();
    json!({ "summary": "Balanced plan", "plan": plan })
}

pub fn diet_plan_json(days: usize) -> String {
    diet_plan_value(days).to_string()
}

pub fn exercise_plan_json(days: usize) -> String {
    let plan: Vec<Value> = (1..=days)
        .map(|day| {
            json!({
                "day": format!("Day {day}"),
                "details": "Light session",
                "exercises": [
                    {
                        "name": "Brisk walk",
                        "description": "Walk at a steady pace",
                        "duration": "20 minutes",
                        "type": "Cardio"
                    },
                    {
                        "name": "Stretching",
                        "description": "Full body stretch",
                        "duration": "10 minutes",
                        "type": "নমনীয়তা"
                    }
                ]
            })
        })
        .collect();
    json!({ "advice": "Stay consistent", "plan": plan }).to_string()
}
