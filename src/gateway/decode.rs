// ABOUTME: Strict decoding of model output into typed payloads at the AI trust boundary
// ABOUTME: Tolerates a Markdown code fence, rejects missing fields and plans that are not seven days long
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use serde::de::DeserializeOwned;

use crate::constants::llm::PLAN_DAYS;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{DietPlan, ExercisePlan};

/// Payloads with post-decode structural checks
pub trait Validate {
    /// Reject values serde accepts but the contract does not
    ///
    /// # Errors
    ///
    /// Returns an `ExternalResponseInvalid` error describing the violation
    fn validate(&self) -> AppResult<()> {
        Ok(())
    }
}

impl Validate for crate::models::SymptomAnalysis {}
impl Validate for crate::models::HealthAdvice {}

impl Validate for DietPlan {
    fn validate(&self) -> AppResult<()> {
        check_plan_length("diet", self.plan.len())
    }
}

impl Validate for ExercisePlan {
    fn validate(&self) -> AppResult<()> {
        check_plan_length("exercise", self.plan.len())
    }
}

fn check_plan_length(kind: &str, days: usize) -> AppResult<()> {
    if days == PLAN_DAYS {
        Ok(())
    } else {
        Err(AppError::new(
            ErrorCode::ExternalResponseInvalid,
            format!("Expected a {PLAN_DAYS}-day {kind} plan, received {days} days"),
        ))
    }
}

/// Remove surrounding whitespace and an optional ```json fence
#[must_use]
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner).trim();
    // Language tag on the opening fence, with or without a line break after it
    let body = inner
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .trim_start();
    if body.starts_with(['{', '[']) {
        body
    } else {
        inner
    }
}

/// Decode and validate one payload
///
/// # Errors
///
/// Returns `ExternalResponseInvalid` when the text is not JSON of the
/// expected shape or fails validation. No partial value is ever returned.
pub fn decode<T>(text: &str) -> AppResult<T>
where
    T: DeserializeOwned + Validate,
{
    let body = strip_code_fence(text);
    let value: T = serde_json::from_str(body).map_err(|e| {
        AppError::new(
            ErrorCode::ExternalResponseInvalid,
            format!("Response does not match the expected schema: {e}"),
        )
        .with_source(e)
    })?;
    value.validate()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{HealthAdvice, SymptomAnalysis};

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("  {\"a\":1} \n"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json{\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```JSON [1, 2]```"), "[1, 2]");
    }

    #[test]
    fn test_missing_field_fails_whole_decode() {
        let text = r#"{"symptoms":["cough"],"causes":[],"treatments":[]}"#;
        let error = decode::<SymptomAnalysis>(text).err();
        assert_eq!(error.map(|e| e.code), Some(ErrorCode::ExternalResponseInvalid));
    }

    #[test]
    fn test_advice_decodes_camel_case() -> AppResult<()> {
        let text = r#"```json
{"dietaryAdvice":["Eat dal"],"exerciseRecommendations":["Walk"],"lifestyleSuggestions":["Sleep"]}
```"#;
        let advice: HealthAdvice = decode(text)?;
        assert_eq!(advice.dietary_advice, vec!["Eat dal".to_owned()]);
        Ok(())
    }

    #[test]
    fn test_short_plan_is_rejected() {
        let text = r#"{"summary":"s","plan":[{"day":"Monday","dailyNote":"n","meals":[]}]}"#;
        assert!(decode::<DietPlan>(text).is_err());
    }
}
