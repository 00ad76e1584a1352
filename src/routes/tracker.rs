// ABOUTME: Health tracker routes: screen state, profile age, entries and advice refresh
// ABOUTME: Thin handlers delegating to TrackerController
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;

use crate::context::AppContext;
use crate::controllers::NewEntry;
use crate::errors::AppError;

/// Body of `PUT /api/tracker/age`
#[derive(Debug, Clone, Deserialize)]
pub struct SetAgeRequest {
    /// Age as typed; empty text clears it
    pub age: String,
}

/// Tracker routes implementation
pub struct TrackerRoutes;

impl TrackerRoutes {
    /// Create all tracker routes
    pub fn routes(context: Arc<AppContext>) -> Router {
        Router::new()
            .route("/api/tracker", get(Self::view))
            .route("/api/tracker/age", put(Self::set_age))
            .route(
                "/api/tracker/entries",
                post(Self::add_entry).delete(Self::clear),
            )
            .route("/api/tracker/advice", post(Self::refresh_advice))
            .with_state(context)
    }

    async fn view(State(context): State<Arc<AppContext>>) -> Result<Response, AppError> {
        let view = context.tracker().view()?;
        Ok((StatusCode::OK, Json(view)).into_response())
    }

    async fn set_age(
        State(context): State<Arc<AppContext>>,
        Json(request): Json<SetAgeRequest>,
    ) -> Result<Response, AppError> {
        context.tracker().set_age(&request.age)?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    async fn add_entry(
        State(context): State<Arc<AppContext>>,
        Json(form): Json<NewEntry>,
    ) -> Result<Response, AppError> {
        let added = context.tracker().add_entry(form).await?;
        Ok((StatusCode::CREATED, Json(added)).into_response())
    }

    async fn clear(State(context): State<Arc<AppContext>>) -> Result<Response, AppError> {
        context.tracker().clear()?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    async fn refresh_advice(
        State(context): State<Arc<AppContext>>,
    ) -> Result<Response, AppError> {
        let outcome = context.tracker().refresh_advice().await?;
        Ok((StatusCode::OK, Json(outcome)).into_response())
    }
}
