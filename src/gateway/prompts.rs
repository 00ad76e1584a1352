// ABOUTME: Prompt builders embedding structured inputs and the requested output language
// ABOUTME: Culturally tuned for users in Bangladesh; every builder is a pure function
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use crate::constants::{llm::PLAN_DAYS, service_names::ASSISTANT_NAME};
use crate::language::Language;
use crate::models::{DietPlanRequest, ExercisePlanRequest, HealthEntry};

/// Symptom analysis prompt
#[must_use]
pub fn symptom_analysis(symptoms: &str, language: Language) -> String {
    let lang = language.instruction_name();
    format!(
        "You are a helpful medical AI assistant called {ASSISTANT_NAME}. \
         The user has provided their symptoms in {lang}. \
         Analyze the following symptoms: \"{symptoms}\". \
         Identify key symptoms, list potential common causes, suggest general non-prescription treatments, \
         and list possible over-the-counter medications. \
         IMPORTANT: Your entire response must be in JSON format conforming to the provided schema. \
         The string values within the JSON response must be in {lang}. \
         Emphasize that this is not a substitute for professional medical advice in your suggestions."
    )
}

/// Health advice prompt built from the latest entry
#[must_use]
pub fn health_advice(latest: &HealthEntry, language: Language) -> String {
    format!(
        "You are a health and wellness AI coach specializing in advice for people from Bangladesh. \
         A user's latest health data is: {}. \
         Based on this, provide a set of concise, actionable, personalized, and age-appropriate health recommendations. \
         The advice, especially dietary, must be culturally relevant for Bangladesh, prioritizing locally available, \
         affordable, and nutritious foods (like various dals, local fish, seasonal vegetables). \
         Do not compromise on nutritional effectiveness. \
         Structure the advice into three categories: 'dietaryAdvice', 'exerciseRecommendations', and 'lifestyleSuggestions'. \
         Frame the advice in a supportive and encouraging tone. \
         Your entire response must be in JSON format conforming to the provided schema. \
         All string values in the JSON response must be in {}.",
        latest.prompt_description(),
        language.instruction_name()
    )
}

/// Diet plan prompt; health data is optional context
#[must_use]
pub fn diet_plan(request: &DietPlanRequest, language: Language) -> String {
    let health_info = request.health_data.as_ref().map_or_else(
        || "They have not provided specific health data.".to_owned(),
        |entry| format!("Their latest health data is: {}.", entry.prompt_description()),
    );
    format!(
        "You are an expert nutritionist AI. A user wants a {PLAN_DAYS}-day diet plan. \
         Their goal is \"{goal}\", their dietary preference is \"{preference}\". {health_info} \
         Create a plan that is appropriate for their age. \
         The user is from Bangladesh, so the food items should be common, affordable, and readily available in \
         Bangladeshi cuisine (e.g., rice (bhaat), lentils (dal), fish (maach), chicken (murgi), and local vegetables). \
         Generate a balanced {PLAN_DAYS}-day diet plan with suggestions for Breakfast, Lunch, and Dinner. \
         Start with a brief 'summary' of the plan's overall strategy. \
         For each day, include a short, encouraging 'dailyNote'. \
         Your entire response must be in JSON format conforming to the provided schema. \
         All string values in the JSON (like summary, dailyNote, day, meal names, and food items) must be in {lang}. \
         Do not include any text outside the JSON.",
        goal = request.goal,
        preference = request.preference,
        lang = language.plan_instruction_name(),
    )
}

/// Exercise plan prompt; the caller guarantees `health` is the latest entry
#[must_use]
pub fn exercise_plan(request: &ExercisePlanRequest, health: &HealthEntry, language: Language) -> String {
    let health_info = format!(
        "The user's latest health data is: {} ({}).",
        health.prompt_description(),
        health.category().prompt_label()
    );
    let personal_info = format!(
        "Their self-assessed fitness level is '{}'. They prefer to exercise at '{}' and have about '{}' available each day.",
        request.fitness_level,
        request.location,
        request.time_per_day.prompt_text()
    );
    format!(
        "You are an expert fitness coach AI. A user wants a {PLAN_DAYS}-day exercise plan. \
         Their primary goal is \"{goal}\". {health_info} {personal_info} \
         First, provide a brief, encouraging paragraph of personalized 'advice' based on the user's goals, age, \
         fitness level, and BMI. This advice should provide a high-level strategy. \
         Then, create a balanced, safe, and age-appropriate {PLAN_DAYS}-day 'plan' tailored to this user. \
         The plan should include a mix of Cardio, Strength, and Flexibility. \
         Adjust the intensity and complexity of exercises based on their age, fitness level, and available location \
         (home vs. gym). Ensure daily workouts fit within the user's available time. \
         For each day in the plan, provide a brief summary of the focus. \
         For each exercise, provide its name, a brief description of how to perform it, its type, and the duration or sets/reps. \
         Always include a rest day. Emphasize warm-ups and cool-downs. \
         Your entire response must be in JSON format conforming to the provided schema, including both the 'advice' and 'plan' fields. \
         All string values in the JSON must be in {lang}.",
        goal = request.goal,
        lang = language.plan_instruction_name(),
    )
}

/// Fun fact prompt
#[must_use]
pub fn fun_fact(language: Language) -> String {
    format!(
        "Provide a single, surprising, and positive trivia about human health or biology. \
         The response must be a single, concise sentence in {}. \
         Do not include any introductory phrases like \"Here's a fun fact:\". Just provide the fact.",
        language.instruction_name()
    )
}
