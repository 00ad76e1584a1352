// ABOUTME: Integration tests for the AI gateway over a scripted provider
// ABOUTME: Verifies preconditions make no calls, strict decoding and the fun fact fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{
    advice_json, analysis_json, diet_plan_json, entry, exercise_plan_json, init_test_logging,
    MockProvider,
};
use poramorshok::{
    errors::ErrorCode,
    gateway::{fallback_fun_fact, AiGateway},
    language::{Language, Message},
    models::{
        DietGoal, DietPlanRequest, DietaryPreference, ExerciseLocation, ExercisePlanRequest,
        ExerciseType, FitnessLevel, TimePerDay,
    },
};

fn gateway(provider: &Arc<MockProvider>) -> AiGateway {
    init_test_logging();
    AiGateway::new(Arc::clone(provider) as _)
}

fn exercise_request(with_health: bool) -> ExercisePlanRequest {
    ExercisePlanRequest {
        goal: DietGoal::MuscleGain,
        health_data: with_health.then(|| entry("2024-01-05", 30, 175.0, 70.0)),
        fitness_level: FitnessLevel::Intermediate,
        location: ExerciseLocation::Gym,
        time_per_day: TimePerDay::Minutes45,
    }
}

// ============================================================================
// Preconditions
// ============================================================================

#[tokio::test]
async fn test_advice_for_empty_history_makes_no_call() {
    let provider = Arc::new(MockProvider::new().always(advice_json("unused")));
    let gateway = gateway(&provider);

    let error = gateway
        .get_health_advice(&[], Language::En)
        .await
        .expect_err("empty history is rejected");

    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    assert_eq!(error.message, Message::NoHealthDataError.text(Language::En));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_blank_symptoms_make_no_call() {
    let provider = Arc::new(MockProvider::new().always(analysis_json()));
    let gateway = gateway(&provider);

    let error = gateway
        .analyze_symptoms("   \n", Language::Bn)
        .await
        .expect_err("blank input is rejected");

    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_exercise_plan_requires_health_data() {
    let provider = Arc::new(MockProvider::new().always(exercise_plan_json(7)));
    let gateway = gateway(&provider);

    let error = gateway
        .generate_exercise_plan(&exercise_request(false), Language::En)
        .await
        .expect_err("missing health data is rejected");

    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    assert_eq!(error.message, Message::HealthDataRequired.text(Language::En));
    assert_eq!(provider.calls(), 0);
}

// ============================================================================
// Structured Operations
// ============================================================================

#[tokio::test]
async fn test_advice_uses_latest_entry_and_schema() {
    let provider = Arc::new(MockProvider::new().respond(advice_json("ok")));
    let gateway = gateway(&provider);
    let history = [
        entry("2024-01-01", 29, 175.0, 80.0),
        entry("2024-01-05", 30, 175.0, 70.0),
    ];

    let advice = gateway
        .get_health_advice(&history, Language::Bn)
        .await
        .expect("advice decodes");

    assert_eq!(advice.dietary_advice, ["ok: eat more vegetables"]);
    assert_eq!(provider.calls(), 1);

    let request = provider.requests().pop().expect("one request");
    assert!(request.expects_json());
    assert!(request.prompt.contains("Bengali"));
    assert!(request.prompt.contains("Weight: 70 kg"));
    assert!(!request.prompt.contains("Weight: 80 kg"));
    let schema = request.response_schema.expect("schema forwarded");
    assert_eq!(
        schema["required"],
        serde_json::json!(["dietaryAdvice", "exerciseRecommendations", "lifestyleSuggestions"])
    );
}

#[tokio::test]
async fn test_symptom_analysis_tolerates_code_fence() {
    let fenced = format!("```json\n{}\n```", analysis_json());
    let provider = Arc::new(MockProvider::new().respond(fenced));
    let gateway = gateway(&provider);

    let analysis = gateway
        .analyze_symptoms("headache and fever", Language::En)
        .await
        .expect("fenced JSON decodes");

    assert_eq!(analysis.symptoms, ["Headache", "Mild fever"]);
    assert_eq!(analysis.medications, ["Paracetamol"]);
}

#[tokio::test]
async fn test_single_line_fence_with_tag_decodes() {
    let fenced = format!("```json{}```", advice_json("inline"));
    let provider = Arc::new(MockProvider::new().respond(fenced));
    let gateway = gateway(&provider);
    let history = [entry("2024-01-05", 30, 175.0, 70.0)];

    let advice = gateway
        .get_health_advice(&history, Language::En)
        .await
        .expect("inline fenced JSON decodes");

    assert_eq!(advice.dietary_advice, ["inline: eat more vegetables"]);
}

#[tokio::test]
async fn test_missing_required_field_fails_whole_operation() {
    let provider = Arc::new(
        MockProvider::new()
            .respond(r#"{"symptoms":["Headache"],"causes":[],"treatments":[]}"#),
    );
    let gateway = gateway(&provider);

    let error = gateway
        .analyze_symptoms("headache", Language::En)
        .await
        .expect_err("partial payload is rejected");

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, Message::AnalysisFailed.text(Language::En));
}

#[tokio::test]
async fn test_transport_failure_maps_to_localized_feature_error() {
    let provider = Arc::new(MockProvider::new().fail(ErrorCode::ExternalServiceUnavailable));
    let gateway = gateway(&provider);
    let request = DietPlanRequest {
        goal: DietGoal::WeightLoss,
        preference: DietaryPreference::Vegan,
        health_data: None,
    };

    let error = gateway
        .generate_diet_plan(&request, Language::Bn)
        .await
        .expect_err("transport failure surfaces");

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, Message::DietPlanFailed.text(Language::Bn));
    assert!(std::error::Error::source(&error).is_some());
}

#[tokio::test]
async fn test_diet_plan_without_health_data_is_allowed() {
    let provider = Arc::new(MockProvider::new().respond(diet_plan_json(7)));
    let gateway = gateway(&provider);
    let request = DietPlanRequest {
        goal: DietGoal::MaintainWeight,
        preference: DietaryPreference::Vegetarian,
        health_data: None,
    };

    let plan = gateway
        .generate_diet_plan(&request, Language::En)
        .await
        .expect("plan decodes");

    assert_eq!(plan.plan.len(), 7);
    assert_eq!(plan.plan[0].daily_note, "Note for day 1");
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_plan_with_wrong_day_count_is_rejected() {
    let provider = Arc::new(MockProvider::new().respond(diet_plan_json(6)));
    let gateway = gateway(&provider);
    let request = DietPlanRequest {
        goal: DietGoal::WeightGain,
        preference: DietaryPreference::NonVegetarian,
        health_data: None,
    };

    let error = gateway
        .generate_diet_plan(&request, Language::En)
        .await
        .expect_err("six days is not a weekly plan");

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
}

#[tokio::test]
async fn test_exercise_plan_accepts_bengali_type_names() {
    let provider = Arc::new(MockProvider::new().respond(exercise_plan_json(7)));
    let gateway = gateway(&provider);

    let plan = gateway
        .generate_exercise_plan(&exercise_request(true), Language::Bn)
        .await
        .expect("plan decodes");

    let types: Vec<ExerciseType> = plan.plan[0]
        .exercises
        .iter()
        .map(|exercise| exercise.exercise_type)
        .collect();
    assert_eq!(types, [ExerciseType::Cardio, ExerciseType::Flexibility]);
    let prompt = provider.last_prompt().expect("prompt recorded");
    assert!(prompt.contains("45 minutes"));
    assert!(prompt.contains("fluent Bengali"));
}

// ============================================================================
// Fun Fact
// ============================================================================

#[tokio::test]
async fn test_fun_fact_is_trimmed_plain_text() {
    let provider = Arc::new(MockProvider::new().respond("  Water makes up 60% of your body.\n"));
    let gateway = gateway(&provider);

    let fact = gateway.get_fun_fact(Language::En).await;

    assert_eq!(fact, "Water makes up 60% of your body.");
    let request = provider.requests().pop().expect("one request");
    assert!(!request.expects_json());
}

#[tokio::test]
async fn test_fun_fact_falls_back_on_failure() {
    for language in Language::ALL {
        let provider = Arc::new(MockProvider::new().fail(ErrorCode::ExternalServiceUnavailable));
        let fact = gateway(&provider).get_fun_fact(language).await;
        assert_eq!(fact, fallback_fun_fact(language));
    }
    assert_ne!(
        fallback_fun_fact(Language::En),
        fallback_fun_fact(Language::Bn)
    );
}

#[tokio::test]
async fn test_fun_fact_treats_blank_text_as_failure() {
    let provider = Arc::new(MockProvider::new().respond("   "));
    let fact = gateway(&provider).get_fun_fact(Language::Bn).await;
    assert_eq!(fact, fallback_fun_fact(Language::Bn));
    assert_eq!(provider.calls(), 1);
}
