// ABOUTME: Planner request options for diet and exercise plan generation
// ABOUTME: Kebab-case wire values shared by the HTTP API, the CLI and the AI prompts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::health::HealthEntry;
use crate::errors::AppError;
use crate::language::Language;

/// Implements `as_str`, `Display` and `FromStr` over the wire values
macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            /// Wire value
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(AppError::invalid_input(format!(
                        "Invalid {} '{other}'",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

/// Health goal shared by both planners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietGoal {
    /// Lose weight (default)
    #[default]
    WeightLoss,
    /// Keep current weight
    MaintainWeight,
    /// Build muscle
    MuscleGain,
    /// Gain weight
    WeightGain,
}

wire_enum!(DietGoal {
    WeightLoss => "weight-loss",
    MaintainWeight => "maintain-weight",
    MuscleGain => "muscle-gain",
    WeightGain => "weight-gain",
});

impl DietGoal {
    /// Localized label
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::WeightLoss, Language::En) => "Weight Loss",
            (Self::MaintainWeight, Language::En) => "Maintain Weight",
            (Self::MuscleGain, Language::En) => "Muscle Gain",
            (Self::WeightGain, Language::En) => "Weight Gain",
            (Self::WeightLoss, Language::Bn) => "ওজন কমানো",
            (Self::MaintainWeight, Language::Bn) => "ওজন বজায় রাখা",
            (Self::MuscleGain, Language::Bn) => "পেশী গঠন",
            (Self::WeightGain, Language::Bn) => "ওজন বাড়ানো",
        }
    }
}

/// Dietary preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryPreference {
    /// Eats meat and fish (default)
    #[default]
    NonVegetarian,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
}

wire_enum!(DietaryPreference {
    NonVegetarian => "non-vegetarian",
    Vegetarian => "vegetarian",
    Vegan => "vegan",
});

impl DietaryPreference {
    /// Localized label
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::NonVegetarian, Language::En) => "Non-Vegetarian",
            (Self::Vegetarian, Language::En) => "Vegetarian",
            (Self::Vegan, Language::En) => "Vegan",
            (Self::NonVegetarian, Language::Bn) => "আমিষভোজী",
            (Self::Vegetarian, Language::Bn) => "নিরামিষভোজী",
            (Self::Vegan, Language::Bn) => "ভেগান",
        }
    }
}

/// Self-assessed fitness level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    /// New to exercise (default)
    #[default]
    Beginner,
    /// Exercises regularly
    Intermediate,
    /// Trains hard
    Advanced,
}

wire_enum!(FitnessLevel {
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
});

/// Preferred exercise location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseLocation {
    /// At home (default)
    #[default]
    Home,
    /// At a gym
    Gym,
}

wire_enum!(ExerciseLocation {
    Home => "home",
    Gym => "gym",
});

/// Time available per day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TimePerDay {
    /// Thirty minutes (default)
    #[default]
    #[serde(rename = "30")]
    Minutes30,
    /// Forty-five minutes
    #[serde(rename = "45")]
    Minutes45,
    /// One hour
    #[serde(rename = "60")]
    Minutes60,
}

wire_enum!(TimePerDay {
    Minutes30 => "30",
    Minutes45 => "45",
    Minutes60 => "60",
});

impl TimePerDay {
    /// Phrase used in prompts, e.g. `45 minutes`
    #[must_use]
    pub fn prompt_text(self) -> String {
        format!("{} minutes", self.as_str())
    }
}

/// Input to diet plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlanRequest {
    /// Goal
    pub goal: DietGoal,
    /// Preference
    pub preference: DietaryPreference,
    /// Latest tracker entry, optional context
    #[serde(default)]
    pub health_data: Option<HealthEntry>,
}

/// Input to exercise plan generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePlanRequest {
    /// Goal
    pub goal: DietGoal,
    /// Latest tracker entry, required by the gateway
    #[serde(default)]
    pub health_data: Option<HealthEntry>,
    /// Fitness level
    pub fitness_level: FitnessLevel,
    /// Location
    pub location: ExerciseLocation,
    /// Time available per day
    pub time_per_day: TimePerDay,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_match_serde() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&DietGoal::MaintainWeight)?, "\"maintain-weight\"");
        assert_eq!(
            serde_json::to_string(&DietaryPreference::NonVegetarian)?,
            "\"non-vegetarian\""
        );
        assert_eq!(serde_json::to_string(&TimePerDay::Minutes45)?, "\"45\"");
        assert_eq!("muscle-gain".parse::<DietGoal>().ok(), Some(DietGoal::MuscleGain));
        assert!("bulk".parse::<DietGoal>().is_err());
        Ok(())
    }

    #[test]
    fn test_time_prompt_text() {
        assert_eq!(TimePerDay::Minutes60.prompt_text(), "60 minutes");
    }
}
