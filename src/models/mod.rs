// ABOUTME: Domain models for health entries, chat messages, AI payloads and planner requests
// ABOUTME: Serde shapes match the persisted JSON and the AI response schemas field for field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! Data models
//!
//! All persisted and AI-facing structures use camelCase JSON field names so
//! stored values and model responses share one representation.

/// AI response payloads
pub mod ai;
/// Chat transcript messages
pub mod chat;
/// Longitudinal health entries
pub mod health;
/// Planner request options
pub mod planner;

pub use ai::{
    DailyDiet, DailyExercisePlan, DietPlan, Exercise, ExercisePlan, ExerciseType, HealthAdvice,
    Meal, SymptomAnalysis,
};
pub use chat::{ChatMessage, Sender};
pub use health::HealthEntry;
pub use planner::{
    DietGoal, DietPlanRequest, DietaryPreference, ExerciseLocation, ExercisePlanRequest,
    FitnessLevel, TimePerDay,
};
