// ABOUTME: Typed AI response payloads for symptom analysis, advice, diet plans and exercise plans
// ABOUTME: Every field is required; a missing field fails decoding of the whole payload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Structured answer to a free-text symptom description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    /// Symptoms identified in the user's text
    pub symptoms: Vec<String>,
    /// Possible common causes
    pub causes: Vec<String>,
    /// General non-prescription treatments
    pub treatments: Vec<String>,
    /// Possible over-the-counter medications
    pub medications: Vec<String>,
}

/// Personalized recommendations derived from the latest health entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAdvice {
    /// Dietary recommendations
    pub dietary_advice: Vec<String>,
    /// Exercise recommendations
    pub exercise_recommendations: Vec<String>,
    /// General wellness suggestions
    pub lifestyle_suggestions: Vec<String>,
}

/// One meal of a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    /// Meal name (Breakfast, Lunch, Dinner)
    pub name: String,
    /// Food items
    pub items: Vec<String>,
}

/// One day of a diet plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDiet {
    /// Day label
    pub day: String,
    /// Short motivational note
    pub daily_note: String,
    /// Meals for the day
    pub meals: Vec<Meal>,
}

/// Seven-day diet plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlan {
    /// Strategy summary
    pub summary: String,
    /// Daily entries, one per day
    pub plan: Vec<DailyDiet>,
}

/// Exercise category
///
/// Models answering in Bengali sometimes translate the enum value, so the
/// Bengali names are accepted on input. Output is always the English value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseType {
    /// Cardiovascular work
    #[serde(alias = "cardio", alias = "কার্ডিও")]
    Cardio,
    /// Strength work
    #[serde(alias = "strength", alias = "শক্তি")]
    Strength,
    /// Mobility and stretching
    #[serde(alias = "flexibility", alias = "নমনীয়তা")]
    Flexibility,
}

impl ExerciseType {
    /// All values, in schema order
    pub const ALL: [Self; 3] = [Self::Cardio, Self::Strength, Self::Flexibility];

    /// Schema enum value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cardio => "Cardio",
            Self::Strength => "Strength",
            Self::Flexibility => "Flexibility",
        }
    }

    /// Localized label
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (_, Language::En) => self.as_str(),
            (Self::Cardio, Language::Bn) => "কার্ডিও",
            (Self::Strength, Language::Bn) => "শক্তি",
            (Self::Flexibility, Language::Bn) => "নমনীয়তা",
        }
    }
}

/// One exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// How to perform it
    pub description: String,
    /// Duration or sets/reps
    pub duration: String,
    /// Category
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
}

/// One day of an exercise plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyExercisePlan {
    /// Day label
    pub day: String,
    /// Focus of the day
    pub details: String,
    /// Exercises, empty on rest days
    pub exercises: Vec<Exercise>,
}

/// Seven-day exercise plan with introductory advice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePlan {
    /// Personalized strategy paragraph
    pub advice: String,
    /// Daily entries, one per day
    pub plan: Vec<DailyExercisePlan>,
}
