// ABOUTME: AI request gateway turning feature requests into one prompt plus schema per call
// ABOUTME: Fails fast on local preconditions and maps every upstream failure to a localized feature error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! # AI Request Gateway
//!
//! One operation issues at most one provider call and never retries. The
//! gateway holds no mutable state, so calls for different features are
//! independent and may run concurrently.
//!
//! Failures at the provider boundary are logged with their cause and then
//! replaced by a generic, localized message with code
//! [`ErrorCode::ExternalServiceError`]; the raw cause stays in the error's
//! source chain. [`AiGateway::get_fun_fact`] is the exception: it never
//! fails and substitutes a fixed fallback sentence instead.
//!
//! The language of the returned text is a prompt instruction only and is
//! not verified.

/// Strict decoding of model output
pub mod decode;
/// Prompt builders
pub mod prompts;
/// Response schemas
pub mod schemas;

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, warn};

use crate::constants::llm;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::language::{Language, Message};
use crate::llm::{GenerationRequest, LlmProvider};
use crate::logging::AppLogger;
use crate::models::{
    DietPlan, DietPlanRequest, ExercisePlan, ExercisePlanRequest, HealthAdvice, HealthEntry,
    SymptomAnalysis,
};
use decode::Validate;

pub use schemas::SCHEMA_VERSION;

/// Gateway to the text-generation provider
#[derive(Clone)]
pub struct AiGateway {
    provider: Arc<dyn LlmProvider>,
}

impl AiGateway {
    /// Gateway over `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Name of the underlying provider
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Reachability of the provider
    ///
    /// # Errors
    ///
    /// Returns an error if the provider cannot be contacted
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    /// Analyze free-text symptoms
    ///
    /// # Errors
    ///
    /// `PreconditionFailed` for blank input (no call is made), otherwise
    /// `ExternalServiceError` carrying the localized analysis failure message
    pub async fn analyze_symptoms(
        &self,
        symptoms: &str,
        language: Language,
    ) -> AppResult<SymptomAnalysis> {
        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            return Err(AppError::precondition(
                Message::EmptySymptomsError.text(language),
            ));
        }
        self.structured(
            "analyze_symptoms",
            language,
            prompts::symptom_analysis(symptoms, language),
            schemas::symptom_analysis(),
            Message::AnalysisFailed,
        )
        .await
    }

    /// Personalized advice from the latest entry of `history`
    ///
    /// # Errors
    ///
    /// `PreconditionFailed` for an empty history (no call is made), otherwise
    /// `ExternalServiceError` carrying the localized fetch failure message
    pub async fn get_health_advice(
        &self,
        history: &[HealthEntry],
        language: Language,
    ) -> AppResult<HealthAdvice> {
        let Some(latest) = history.last() else {
            return Err(AppError::precondition(
                Message::NoHealthDataError.text(language),
            ));
        };
        self.structured(
            "get_health_advice",
            language,
            prompts::health_advice(latest, language),
            schemas::health_advice(),
            Message::FetchAdviceError,
        )
        .await
    }

    /// Seven-day diet plan; health data is optional context
    ///
    /// # Errors
    ///
    /// `ExternalServiceError` carrying the localized diet plan failure message
    pub async fn generate_diet_plan(
        &self,
        request: &DietPlanRequest,
        language: Language,
    ) -> AppResult<DietPlan> {
        self.structured(
            "generate_diet_plan",
            language,
            prompts::diet_plan(request, language),
            schemas::diet_plan(),
            Message::DietPlanFailed,
        )
        .await
    }

    /// Seven-day exercise plan
    ///
    /// # Errors
    ///
    /// `PreconditionFailed` without health data (no call is made), otherwise
    /// `ExternalServiceError` carrying the localized exercise plan failure message
    pub async fn generate_exercise_plan(
        &self,
        request: &ExercisePlanRequest,
        language: Language,
    ) -> AppResult<ExercisePlan> {
        let Some(health) = request.health_data.as_ref() else {
            return Err(AppError::precondition(
                Message::HealthDataRequired.text(language),
            ));
        };
        self.structured(
            "generate_exercise_plan",
            language,
            prompts::exercise_plan(request, health, language),
            schemas::exercise_plan(),
            Message::ExercisePlanFailed,
        )
        .await
    }

    /// One short health fact; falls back to a fixed sentence on any failure
    pub async fn get_fun_fact(&self, language: Language) -> String {
        let started = Instant::now();
        let request = GenerationRequest::new(prompts::fun_fact(language));
        let outcome = self
            .provider
            .generate(&request)
            .await
            .and_then(|response| {
                let fact = response.content.trim();
                if fact.is_empty() {
                    Err(AppError::new(
                        ErrorCode::ExternalResponseInvalid,
                        "AI returned an empty fun fact",
                    ))
                } else {
                    Ok(fact.to_owned())
                }
            });
        AppLogger::log_ai_call("get_fun_fact", language, outcome.is_ok(), elapsed_ms(started));

        outcome.unwrap_or_else(|e| {
            warn!(language = %language, error = %e, "Using fallback fun fact");
            fallback_fun_fact(language).to_owned()
        })
    }

    async fn structured<T>(
        &self,
        operation: &'static str,
        language: Language,
        prompt: String,
        schema: Value,
        failure: Message,
    ) -> AppResult<T>
    where
        T: DeserializeOwned + Validate,
    {
        let started = Instant::now();
        let request = GenerationRequest::new(prompt).with_response_schema(schema);
        let outcome = self
            .provider
            .generate(&request)
            .await
            .and_then(|response| decode::decode::<T>(&response.content));
        AppLogger::log_ai_call(operation, language, outcome.is_ok(), elapsed_ms(started));

        outcome.map_err(|cause| {
            error!(
                operation = operation,
                language = %language,
                error_code = ?cause.code,
                error = %cause,
                "AI gateway call failed"
            );
            AppError::new(ErrorCode::ExternalServiceError, failure.text(language))
                .with_source(cause)
        })
    }
}

impl std::fmt::Debug for AiGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiGateway")
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Fixed fact used when the provider cannot supply one
#[must_use]
pub const fn fallback_fun_fact(language: Language) -> &'static str {
    match language {
        Language::En => llm::FALLBACK_FUN_FACT_EN,
        Language::Bn => llm::FALLBACK_FUN_FACT_BN,
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
