// ABOUTME: Exercise planner controller; requires a tracker entry before any gateway call
// ABOUTME: Keeps the last applied plan in memory for the current session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use super::RequestSlot;
use crate::errors::{AppError, AppResult};
use crate::gateway::AiGateway;
use crate::language::LanguageContext;
use crate::models::{DietGoal, ExerciseLocation, ExercisePlan, ExercisePlanRequest, FitnessLevel, TimePerDay};
use crate::records::HealthRecordStore;
use crate::storage::Storage;

/// Exercise planner form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseOptions {
    /// Primary goal
    #[serde(default)]
    pub goal: DietGoal,
    /// Self-assessed fitness level
    #[serde(default)]
    pub fitness_level: FitnessLevel,
    /// Preferred location
    #[serde(default)]
    pub location: ExerciseLocation,
    /// Time available per day
    #[serde(default)]
    pub time_per_day: TimePerDay,
}

/// Exercise planner controller
#[derive(Debug)]
pub struct ExerciseController {
    records: HealthRecordStore,
    gateway: AiGateway,
    language: LanguageContext,
    slot: RequestSlot,
    current: RwLock<Option<ExercisePlan>>,
}

impl ExerciseController {
    /// Controller over `storage`
    #[must_use]
    pub fn new(storage: &Storage, gateway: AiGateway, language: LanguageContext) -> Self {
        Self {
            records: HealthRecordStore::new(storage.clone()),
            gateway,
            language,
            slot: RequestSlot::new("exercise plan"),
            current: RwLock::new(None),
        }
    }

    /// Generate a plan from the latest tracker entry
    ///
    /// # Errors
    ///
    /// - `PreconditionFailed` when the tracker is empty; no call is made
    /// - `ResourceLocked` while a previous plan is still generating
    /// - `ExternalServiceError` with the localized failure message
    pub async fn generate(&self, options: ExerciseOptions) -> AppResult<ExercisePlan> {
        let language = self.language.current();
        let request = ExercisePlanRequest {
            goal: options.goal,
            health_data: self.records.latest()?,
            fitness_level: options.fitness_level,
            location: options.location,
            time_per_day: options.time_per_day,
        };
        let ticket = self.slot.try_begin()?;

        let result = self.gateway.generate_exercise_plan(&request, language).await;
        let plan = ticket
            .finish(result)
            .ok_or_else(|| AppError::busy(self.slot.feature()))??;

        *self.current.write().await = Some(plan.clone());
        info!(
            goal = %options.goal,
            level = %options.fitness_level,
            location = %options.location,
            "Exercise plan generated"
        );
        Ok(plan)
    }

    /// Last generated plan
    pub async fn current(&self) -> Option<ExercisePlan> {
        self.current.read().await.clone()
    }
}
