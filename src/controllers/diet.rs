// ABOUTME: Diet planner controller generating seven-day plans with optional tracker context
// ABOUTME: Keeps the last applied plan in memory and renders Markdown exports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use super::RequestSlot;
use crate::errors::{AppError, AppResult};
use crate::formatters::{self, ExportFormat, FormattedOutput};
use crate::gateway::AiGateway;
use crate::language::LanguageContext;
use crate::models::{DietGoal, DietPlan, DietPlanRequest, DietaryPreference};
use crate::records::HealthRecordStore;
use crate::storage::Storage;

/// Diet planner form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DietOptions {
    /// Health goal
    #[serde(default)]
    pub goal: DietGoal,
    /// Dietary preference
    #[serde(default)]
    pub preference: DietaryPreference,
}

/// Diet planner controller
#[derive(Debug)]
pub struct DietController {
    records: HealthRecordStore,
    gateway: AiGateway,
    language: LanguageContext,
    slot: RequestSlot,
    current: RwLock<Option<(DietOptions, DietPlan)>>,
}

impl DietController {
    /// Controller over `storage`
    #[must_use]
    pub fn new(storage: &Storage, gateway: AiGateway, language: LanguageContext) -> Self {
        Self {
            records: HealthRecordStore::new(storage.clone()),
            gateway,
            language,
            slot: RequestSlot::new("diet plan"),
            current: RwLock::new(None),
        }
    }

    /// Generate a plan, using the latest tracker entry as context when present
    ///
    /// # Errors
    ///
    /// `ResourceLocked` while a previous plan is still generating, otherwise
    /// `ExternalServiceError` with the localized failure message
    pub async fn generate(&self, options: DietOptions) -> AppResult<DietPlan> {
        let ticket = self.slot.try_begin()?;
        let language = self.language.current();
        let request = DietPlanRequest {
            goal: options.goal,
            preference: options.preference,
            health_data: self.records.latest()?,
        };

        let result = self.gateway.generate_diet_plan(&request, language).await;
        let plan = ticket
            .finish(result)
            .ok_or_else(|| AppError::busy(self.slot.feature()))??;

        *self.current.write().await = Some((options, plan.clone()));
        info!(goal = %options.goal, preference = %options.preference, "Diet plan generated");
        Ok(plan)
    }

    /// Last generated plan with the options it was made for
    pub async fn current(&self) -> Option<(DietOptions, DietPlan)> {
        self.current.read().await.clone()
    }

    /// Render `plan` for download in the active language
    ///
    /// # Errors
    ///
    /// Returns a serialization error if JSON encoding fails
    pub fn export(
        &self,
        options: DietOptions,
        plan: &DietPlan,
        format: ExportFormat,
    ) -> AppResult<FormattedOutput> {
        formatters::export_diet_plan(
            plan,
            options.goal,
            options.preference,
            self.language.current(),
            format,
        )
    }
}
