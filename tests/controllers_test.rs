// ABOUTME: Integration tests for the chat, planner and fun fact controllers
// ABOUTME: Exercises busy rejection, stale result handling and failure transcripts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{
    advice_json, analysis_json, create_test_context, diet_plan_json, exercise_plan_json,
    MockProvider,
};
use poramorshok::{
    controllers::{DietOptions, ExerciseOptions, HeightInput, NewEntry, RequestSlot},
    errors::ErrorCode,
    formatters::ExportFormat,
    language::{Language, Message},
    models::{DietGoal, DietaryPreference, Sender},
};

// ============================================================================
// Request Slots
// ============================================================================

#[test]
fn test_try_begin_refuses_while_loading() {
    let slot = RequestSlot::new("test");
    let ticket = slot.try_begin().expect("idle slot");
    assert!(slot.is_loading());

    let error = slot.try_begin().expect_err("busy slot");
    assert_eq!(error.code, ErrorCode::ResourceLocked);

    assert_eq!(ticket.finish(1), Some(1));
    assert!(!slot.is_loading());
    assert!(slot.try_begin().is_ok());
}

#[test]
fn test_begin_supersedes_older_ticket() {
    let slot = RequestSlot::new("test");
    let older = slot.begin();
    let newer = slot.begin();

    assert!(!older.is_current());
    assert_eq!(older.finish("old"), None);
    assert!(slot.is_loading());
    assert_eq!(newer.finish("new"), Some("new"));
    assert!(!slot.is_loading());
}

#[test]
fn test_dropped_ticket_releases_slot() {
    let slot = RequestSlot::new("test");
    drop(slot.try_begin().expect("idle slot"));
    assert!(!slot.is_loading());
}

// ============================================================================
// Symptom Chat
// ============================================================================

#[tokio::test]
async fn test_chat_appends_question_and_analysis() {
    let provider = Arc::new(MockProvider::new().respond(analysis_json()));
    let context = create_test_context(provider);
    let chat = context.chat();

    let reply = chat.send("  headache since morning ").await.expect("reply");

    assert_eq!(reply.sender, Sender::Ai);
    assert_eq!(reply.text, Message::AnalysisDisclaimer.text(Language::En));
    assert!(reply.analysis.is_some());

    let history = chat.history().expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].text, "headache since morning");
    assert_eq!(history[1], reply);
}

#[tokio::test]
async fn test_chat_failure_appends_error_message() {
    let provider = Arc::new(MockProvider::new().fail(ErrorCode::ExternalServiceUnavailable));
    let context = create_test_context(provider);
    let chat = context.chat();

    let error = chat.send("fever").await.expect_err("analysis fails");
    assert_eq!(error.code, ErrorCode::ExternalServiceError);

    let history = chat.history().expect("history");
    let last = history.last().expect("error message appended");
    assert_eq!(last.sender, Sender::Ai);
    assert_eq!(
        last.text,
        "Sorry, I couldn't process that. Failed to get analysis from AI. Please try again."
    );
    assert!(last.analysis.is_none());
}

#[tokio::test]
async fn test_blank_chat_input_changes_nothing() {
    let provider = Arc::new(MockProvider::new());
    let context = create_test_context(Arc::clone(&provider));

    let error = context.chat().send("  ").await.expect_err("blank input");

    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    assert!(context.chat().history().expect("history").is_empty());
    assert_eq!(provider.calls(), 0);
}

// ============================================================================
// Diet Planner
// ============================================================================

#[tokio::test]
async fn test_diet_generate_rejects_second_submit_while_loading() {
    let provider = Arc::new(
        MockProvider::new()
            .respond(diet_plan_json(7))
            .with_delays([Duration::from_millis(200)]),
    );
    let context = create_test_context(Arc::clone(&provider));
    let diet = context.diet();

    let first = tokio::spawn({
        let diet = Arc::clone(&diet);
        async move { diet.generate(DietOptions::default()).await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    let error = diet
        .generate(DietOptions::default())
        .await
        .expect_err("second submit is busy");
    assert_eq!(error.code, ErrorCode::ResourceLocked);

    let plan = first.await.expect("task joins").expect("first plan");
    assert_eq!(plan.plan.len(), 7);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_diet_plan_is_kept_and_exported() {
    let provider = Arc::new(MockProvider::new().respond(diet_plan_json(7)));
    let context = create_test_context(provider);
    let diet = context.diet();
    let options = DietOptions {
        goal: DietGoal::MuscleGain,
        preference: DietaryPreference::Vegan,
    };

    diet.generate(options).await.expect("plan");
    let (stored_options, plan) = diet.current().await.expect("plan kept");
    assert_eq!(stored_options, options);

    let markdown = diet
        .export(stored_options, &plan, ExportFormat::Markdown)
        .expect("markdown export");
    assert_eq!(markdown.file_name, "7-Day-Diet-Plan.md");
    assert!(markdown.data.starts_with("# Your 7-Day Diet Plan\n\n**Health Goal:** Muscle Gain\n"));

    let json = diet
        .export(stored_options, &plan, ExportFormat::Json)
        .expect("json export");
    assert_eq!(json.content_type, "application/json");
    let value: serde_json::Value = serde_json::from_str(&json.data).expect("valid JSON");
    assert_eq!(value["plan"].as_array().map(Vec::len), Some(7));
}

#[tokio::test]
async fn test_failed_diet_plan_keeps_previous_plan() {
    let provider = Arc::new(
        MockProvider::new()
            .respond(diet_plan_json(7))
            .respond("not json"),
    );
    let context = create_test_context(provider);
    let diet = context.diet();

    diet.generate(DietOptions::default()).await.expect("first plan");
    let error = diet
        .generate(DietOptions::default())
        .await
        .expect_err("undecodable plan");

    assert_eq!(error.message, Message::DietPlanFailed.text(Language::En));
    assert!(diet.current().await.is_some());
}

// ============================================================================
// Exercise Planner
// ============================================================================

#[tokio::test]
async fn test_exercise_plan_needs_a_tracker_entry() {
    let provider = Arc::new(MockProvider::new().always(exercise_plan_json(7)));
    let context = create_test_context(Arc::clone(&provider));

    let error = context
        .exercise()
        .generate(ExerciseOptions::default())
        .await
        .expect_err("no tracker entry");

    assert_eq!(error.code, ErrorCode::PreconditionFailed);
    assert_eq!(provider.calls(), 0);
    assert!(context.exercise().current().await.is_none());
}

#[tokio::test]
async fn test_exercise_plan_uses_latest_entry() {
    let provider = Arc::new(
        MockProvider::new()
            .respond(advice_json("en"))
            .respond(exercise_plan_json(7)),
    );
    let context = create_test_context(Arc::clone(&provider));
    context
        .tracker()
        .add_entry(NewEntry {
            age: Some(35),
            height: HeightInput::Cm { cm: 180.0 },
            weight: 82.0,
        })
        .await
        .expect("entry");

    let plan = context
        .exercise()
        .generate(ExerciseOptions::default())
        .await
        .expect("plan");

    assert_eq!(plan.plan.len(), 7);
    assert_eq!(plan.advice, "Stay consistent");
    let prompt = provider.last_prompt().expect("prompt");
    assert!(prompt.contains("Age: 35 years, Height: 180 cm, Weight: 82 kg"));
    assert!(prompt.contains("30 minutes"));
}

// ============================================================================
// Fun Fact
// ============================================================================

#[tokio::test]
async fn test_newer_fun_fact_wins_the_banner() {
    let provider = Arc::new(
        MockProvider::new()
            .respond("Older fact.")
            .respond("Newer fact.")
            .with_delays([Duration::from_millis(200), Duration::ZERO]),
    );
    let context = create_test_context(provider);
    let fun_fact = context.fun_fact();

    let older = tokio::spawn({
        let fun_fact = Arc::clone(&fun_fact);
        async move { fun_fact.fetch().await }
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(fun_fact.fetch().await, "Newer fact.");
    assert_eq!(older.await.expect("task joins"), "Older fact.");
    assert_eq!(
        fun_fact.current().await,
        Some((Language::En, "Newer fact.".to_owned()))
    );
}

#[tokio::test]
async fn test_fun_fact_follows_active_language() {
    let provider = Arc::new(MockProvider::new().fail(ErrorCode::ExternalServiceUnavailable));
    let context = create_test_context(provider);
    context.language().set(Language::Bn);

    let fact = context.fun_fact().fetch().await;

    assert_eq!(fact, poramorshok::gateway::fallback_fun_fact(Language::Bn));
    assert_eq!(
        context.fun_fact().current().await.map(|(language, _)| language),
        Some(Language::Bn)
    );
}
