// ABOUTME: Diet and exercise planner routes, including diet plan export downloads
// ABOUTME: Export answers with a content type and an attachment file name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use crate::context::AppContext;
use crate::controllers::{DietOptions, ExerciseOptions};
use crate::errors::AppError;
use crate::formatters::ExportFormat;
use crate::models::DietPlan;

/// Body of `POST /api/diet-plan/export`
#[derive(Debug, Clone, Deserialize)]
pub struct ExportDietPlanRequest {
    /// Options the plan was generated for; defaults to those of the last plan
    #[serde(default)]
    pub options: Option<DietOptions>,
    /// Plan to export; defaults to the last generated plan
    #[serde(default)]
    pub plan: Option<DietPlan>,
    /// `markdown` (default) or `json`
    #[serde(default)]
    pub format: Option<String>,
}

/// Planner routes implementation
pub struct PlannerRoutes;

impl PlannerRoutes {
    /// Create all planner routes
    pub fn routes(context: Arc<AppContext>) -> Router {
        Router::new()
            .route("/api/diet-plan", post(Self::generate_diet_plan))
            .route("/api/diet-plan/export", post(Self::export_diet_plan))
            .route("/api/exercise-plan", post(Self::generate_exercise_plan))
            .with_state(context)
    }

    async fn generate_diet_plan(
        State(context): State<Arc<AppContext>>,
        Json(options): Json<DietOptions>,
    ) -> Result<Response, AppError> {
        let plan = context.diet().generate(options).await?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }

    async fn export_diet_plan(
        State(context): State<Arc<AppContext>>,
        Json(request): Json<ExportDietPlanRequest>,
    ) -> Result<Response, AppError> {
        let diet = context.diet();
        let (options, plan) = match (request.options, request.plan) {
            (options, Some(plan)) => (options.unwrap_or_default(), plan),
            (options, None) => {
                let (last_options, plan) = diet
                    .current()
                    .await
                    .ok_or_else(|| AppError::not_found("Diet plan"))?;
                (options.unwrap_or(last_options), plan)
            }
        };
        let format = request
            .format
            .as_deref()
            .map_or(ExportFormat::Markdown, ExportFormat::from_str_param);

        let output = diet.export(options, &plan, format)?;
        let disposition = HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            output.file_name
        ))
        .map_err(|e| AppError::internal(format!("Invalid download header: {e}")))?;

        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, HeaderValue::from_static(output.content_type)),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            output.data,
        )
            .into_response())
    }

    async fn generate_exercise_plan(
        State(context): State<Arc<AppContext>>,
        Json(options): Json<ExerciseOptions>,
    ) -> Result<Response, AppError> {
        let plan = context.exercise().generate(options).await?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
