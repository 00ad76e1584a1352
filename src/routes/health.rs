// ABOUTME: Health check route for liveness monitoring of the local API server
// ABOUTME: Reports version, storage backend, AI provider and active language without calling the AI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::context::AppContext;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(context: Arc<AppContext>) -> Router {
        Router::new()
            .route("/health", get(Self::health_handler))
            .with_state(context)
    }

    async fn health_handler(State(context): State<Arc<AppContext>>) -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "storage": context.storage().backend_name(),
            "provider": context.gateway().provider_name(),
            "apiKeyConfigured": context.config().has_api_key(),
            "language": context.language().current(),
        }))
    }
}
