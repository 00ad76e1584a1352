// ABOUTME: HTTP tests for the full router using in-process requests
// ABOUTME: Checks status codes, error bodies, export headers and request id propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use std::sync::Arc;

use axum::Router;
use common::{advice_json, analysis_json, create_test_context, diet_plan_json, MockProvider};
use helpers::axum_test::AxumTestRequest;
use poramorshok::{context::AppContext, routes::build_router};
use serde_json::{json, Value};

fn router(provider: &Arc<MockProvider>) -> (Arc<AppContext>, Router) {
    let context = create_test_context(Arc::clone(provider));
    let router = build_router(Arc::clone(&context));
    (context, router)
}

#[tokio::test]
async fn test_health_endpoint() {
    let provider = Arc::new(MockProvider::new());
    let (_, app) = router(&provider);

    let response = AxumTestRequest::get("/health").send(app).await;

    assert_eq!(response.status(), 200);
    assert!(response.header("x-request-id").is_some());
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"], "memory");
    assert_eq!(body["provider"], "mock");
    assert_eq!(body["language"], "en");
}

#[tokio::test]
async fn test_incoming_request_id_is_echoed() {
    let provider = Arc::new(MockProvider::new());
    let (_, app) = router(&provider);

    let response = AxumTestRequest::get("/health")
        .header("x-request-id", "req-12345")
        .send(app)
        .await;

    assert_eq!(response.header("x-request-id").as_deref(), Some("req-12345"));
}

#[tokio::test]
async fn test_language_routes() {
    let provider = Arc::new(MockProvider::new());
    let (context, app) = router(&provider);

    let toggled: Value = AxumTestRequest::post("/api/language/toggle")
        .send(app.clone())
        .await
        .json();
    assert_eq!(toggled, json!({ "language": "bn", "changed": true }));

    let unchanged: Value = AxumTestRequest::put("/api/language")
        .json(&json!({ "language": "bn" }))
        .send(app.clone())
        .await
        .json();
    assert_eq!(unchanged["changed"], false);

    let rejected = AxumTestRequest::put("/api/language")
        .json(&json!({ "language": "fr" }))
        .send(app)
        .await;
    assert!(rejected.status_code().is_client_error());
    assert_eq!(context.language().current().as_str(), "bn");
}

#[tokio::test]
async fn test_tracker_entry_lifecycle() {
    let provider = Arc::new(MockProvider::new().respond(advice_json("en")));
    let (_, app) = router(&provider);

    let missing_age = AxumTestRequest::post("/api/tracker/entries")
        .json(&json!({ "height": { "unit": "cm", "cm": 175.0 }, "weight": 70.0 }))
        .send(app.clone())
        .await;
    assert_eq!(missing_age.status(), 422);
    let error: Value = missing_age.json();
    assert_eq!(error["error"]["code"], "PRECONDITION_FAILED");

    let age = AxumTestRequest::put("/api/tracker/age")
        .json(&json!({ "age": "28" }))
        .send(app.clone())
        .await;
    assert_eq!(age.status(), 204);

    let created = AxumTestRequest::post("/api/tracker/entries")
        .json(&json!({
            "height": { "unit": "feetInches", "feet": 5.0, "inches": 9.0 },
            "weight": 70.0
        }))
        .send(app.clone())
        .await;
    assert_eq!(created.status(), 201);
    let added: Value = created.json();
    assert_eq!(added["entry"]["age"], 28);
    assert_eq!(added["entry"]["date"], "2024-03-15");
    assert_eq!(added["advice"]["status"], "fetched");

    let view: Value = AxumTestRequest::get("/api/tracker").send(app.clone()).await.json();
    assert_eq!(view["history"].as_array().map(Vec::len), Some(1));
    assert_eq!(view["categoryLabel"], "Normal");

    let cleared = AxumTestRequest::delete("/api/tracker/entries")
        .send(app.clone())
        .await;
    assert_eq!(cleared.status(), 204);

    let advice = AxumTestRequest::post("/api/tracker/advice").send(app).await;
    assert_eq!(advice.status(), 422);
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_chat_routes() {
    let provider = Arc::new(MockProvider::new().respond(analysis_json()));
    let (_, app) = router(&provider);

    let reply = AxumTestRequest::post("/api/chat")
        .json(&json!({ "message": "sore throat" }))
        .send(app.clone())
        .await;
    assert_eq!(reply.status(), 200);
    let reply: Value = reply.json();
    assert_eq!(reply["sender"], "ai");
    assert_eq!(reply["analysis"]["medications"][0], "Paracetamol");

    let history: Value = AxumTestRequest::get("/api/chat").send(app.clone()).await.json();
    assert_eq!(history["messages"].as_array().map(Vec::len), Some(2));

    let failed = AxumTestRequest::post("/api/chat")
        .json(&json!({ "message": "cough" }))
        .send(app.clone())
        .await;
    assert_eq!(failed.status(), 502);

    let cleared = AxumTestRequest::delete("/api/chat").send(app.clone()).await;
    assert_eq!(cleared.status(), 204);
    let history: Value = AxumTestRequest::get("/api/chat").send(app).await.json();
    assert_eq!(history["messages"], json!([]));
}

#[tokio::test]
async fn test_diet_plan_export() {
    let provider = Arc::new(MockProvider::new().respond(diet_plan_json(7)));
    let (_, app) = router(&provider);

    let nothing = AxumTestRequest::post("/api/diet-plan/export")
        .json(&json!({}))
        .send(app.clone())
        .await;
    assert_eq!(nothing.status(), 404);

    let plan = AxumTestRequest::post("/api/diet-plan")
        .json(&json!({ "goal": "weight-gain", "preference": "vegetarian" }))
        .send(app.clone())
        .await;
    assert_eq!(plan.status(), 200);

    let markdown = AxumTestRequest::post("/api/diet-plan/export")
        .json(&json!({}))
        .send(app.clone())
        .await;
    assert_eq!(markdown.status(), 200);
    assert_eq!(
        markdown.header("content-type").as_deref(),
        Some("text/markdown; charset=utf-8")
    );
    assert_eq!(
        markdown.header("content-disposition").as_deref(),
        Some("attachment; filename=\"7-Day-Diet-Plan.md\"")
    );
    assert!(markdown.text().contains("**Health Goal:** Weight Gain"));

    let json_export = AxumTestRequest::post("/api/diet-plan/export")
        .json(&json!({ "format": "json" }))
        .send(app)
        .await;
    assert_eq!(
        json_export.header("content-type").as_deref(),
        Some("application/json")
    );
    let body: Value = json_export.json();
    assert_eq!(body["summary"], "Balanced plan");
}

#[tokio::test]
async fn test_exercise_plan_without_entry_is_unprocessable() {
    let provider = Arc::new(MockProvider::new());
    let (_, app) = router(&provider);

    let response = AxumTestRequest::post("/api/exercise-plan")
        .json(&json!({ "goal": "muscle-gain", "timePerDay": "60" }))
        .send(app)
        .await;

    assert_eq!(response.status(), 422);
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_fun_fact_route() {
    let provider = Arc::new(MockProvider::new().respond("Your heart beats about 100,000 times a day."));
    let (_, app) = router(&provider);

    let body: Value = AxumTestRequest::get("/api/fun-fact").send(app).await.json();

    assert_eq!(body["language"], "en");
    assert_eq!(body["fact"], "Your heart beats about 100,000 times a day.");
}
