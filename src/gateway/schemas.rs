// ABOUTME: Versioned JSON response schemas sent to the model for each structured operation
// ABOUTME: Field names match the serde shapes in models::ai so strict decoding mirrors the contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use serde_json::{json, Value};

use crate::constants::llm::PLAN_DAYS;
use crate::models::ExerciseType;

/// Version of the response contracts below; bump when any shape changes
pub const SCHEMA_VERSION: u32 = 2;

fn string_list(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
        "description": description,
    })
}

/// Contract for [`SymptomAnalysis`](crate::models::SymptomAnalysis)
#[must_use]
pub fn symptom_analysis() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "symptoms": string_list("List of identified symptoms from the user's query."),
            "causes": string_list("List of potential common causes for the symptoms."),
            "treatments": string_list("List of general non-prescription treatments or lifestyle advice."),
            "medications": string_list("List of possible over-the-counter medications. Must include advice to consult a doctor for prescriptions."),
        },
        "required": ["symptoms", "causes", "treatments", "medications"],
    })
}

/// Contract for [`HealthAdvice`](crate::models::HealthAdvice)
#[must_use]
pub fn health_advice() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "dietaryAdvice": string_list("A list of 2-3 specific, actionable dietary recommendations."),
            "exerciseRecommendations": string_list("A list of 2-3 specific, actionable exercise recommendations."),
            "lifestyleSuggestions": string_list("A list of 1-2 general wellness or lifestyle suggestions (e.g., sleep, stress management)."),
        },
        "required": ["dietaryAdvice", "exerciseRecommendations", "lifestyleSuggestions"],
    })
}

/// Contract for [`DietPlan`](crate::models::DietPlan)
#[must_use]
pub fn diet_plan() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": {
                "type": "STRING",
                "description": "A brief, 2-3 sentence summary of the overall diet plan's strategy and focus.",
            },
            "plan": {
                "type": "ARRAY",
                "minItems": PLAN_DAYS,
                "maxItems": PLAN_DAYS,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "STRING", "description": "Day of the week (e.g., Monday)." },
                        "dailyNote": {
                            "type": "STRING",
                            "description": "A short, motivational, or informational note for the day (e.g., 'Focus on hydration today.').",
                        },
                        "meals": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING", "description": "Meal name (e.g., Breakfast, Lunch, Dinner)." },
                                    "items": string_list("List of food items for the meal."),
                                },
                                "required": ["name", "items"],
                            },
                        },
                    },
                    "required": ["day", "dailyNote", "meals"],
                },
            },
        },
        "required": ["summary", "plan"],
    })
}

/// Contract for [`ExercisePlan`](crate::models::ExercisePlan)
#[must_use]
pub fn exercise_plan() -> Value {
    let exercise_types: Vec<&str> = ExerciseType::ALL.iter().map(|t| t.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "advice": {
                "type": "STRING",
                "description": "A brief, encouraging paragraph of personalized advice based on the user's goals, age, fitness level, and BMI. This should be presented before the weekly plan.",
            },
            "plan": {
                "type": "ARRAY",
                "minItems": PLAN_DAYS,
                "maxItems": PLAN_DAYS,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "STRING", "description": "Day of the week (e.g., Monday)." },
                        "details": {
                            "type": "STRING",
                            "description": "A brief description for the day's focus (e.g., 'Cardio and Core').",
                        },
                        "exercises": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": { "type": "STRING", "description": "Name of the exercise." },
                                    "description": { "type": "STRING", "description": "Brief description or instruction for the exercise." },
                                    "duration": { "type": "STRING", "description": "Duration or sets/reps (e.g., '30 minutes', '3 sets of 12')." },
                                    "type": { "type": "STRING", "enum": exercise_types, "description": "The type of exercise." },
                                },
                                "required": ["name", "description", "duration", "type"],
                            },
                        },
                    },
                    "required": ["day", "details", "exercises"],
                },
            },
        },
        "required": ["advice", "plan"],
    })
}
