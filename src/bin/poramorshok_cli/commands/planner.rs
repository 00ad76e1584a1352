// ABOUTME: Diet and exercise planner commands for poramorshok-cli
// ABOUTME: Generates 7-day plans and optionally exports the diet plan to a file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::path::PathBuf;

use anyhow::Result;
use poramorshok::{
    context::AppContext,
    controllers::{DietOptions, ExerciseOptions},
    formatters::ExportFormat,
    models::{DietGoal, DietaryPreference, ExerciseLocation, FitnessLevel, TimePerDay},
};
use tracing::info;

use crate::helpers::display;

/// Generate a diet plan, print it and optionally write an export file
pub async fn diet(
    context: &AppContext,
    goal: DietGoal,
    preference: DietaryPreference,
    export: Option<PathBuf>,
    format: ExportFormat,
) -> Result<()> {
    let options = DietOptions { goal, preference };
    let controller = context.diet();
    let plan = controller.generate(options).await?;
    display::display_diet_plan(&plan);

    if let Some(path) = export {
        let output = controller.export(options, &plan, format)?;
        tokio::fs::write(&path, output.data).await?;
        info!(path = %path.display(), format = %format, "Diet plan exported");
        println!("\nSaved {}", path.display());
    }
    Ok(())
}

/// Generate an exercise plan from the latest tracker entry and print it
pub async fn exercise(
    context: &AppContext,
    goal: DietGoal,
    fitness_level: FitnessLevel,
    location: ExerciseLocation,
    time_per_day: TimePerDay,
) -> Result<()> {
    let options = ExerciseOptions {
        goal,
        fitness_level,
        location,
        time_per_day,
    };
    let plan = context.exercise().generate(options).await?;
    display::display_exercise_plan(&plan, context.language().current());
    Ok(())
}
