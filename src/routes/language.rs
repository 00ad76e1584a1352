// ABOUTME: Language routes for reading, setting and toggling the active output language
// ABOUTME: A change wakes subscribers such as the tracker's advice watcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::language::Language;

/// Body of `PUT /api/language`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SetLanguageRequest {
    /// New language
    pub language: Language,
}

/// Language state returned by every language route
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageResponse {
    /// Active language
    pub language: Language,
    /// Whether this call changed it
    pub changed: bool,
}

/// Language routes implementation
pub struct LanguageRoutes;

impl LanguageRoutes {
    /// Create all language routes
    pub fn routes(context: Arc<AppContext>) -> Router {
        Router::new()
            .route(
                "/api/language",
                get(Self::get_language).put(Self::set_language),
            )
            .route("/api/language/toggle", post(Self::toggle_language))
            .with_state(context)
    }

    async fn get_language(State(context): State<Arc<AppContext>>) -> Json<LanguageResponse> {
        Json(LanguageResponse {
            language: context.language().current(),
            changed: false,
        })
    }

    async fn set_language(
        State(context): State<Arc<AppContext>>,
        Json(request): Json<SetLanguageRequest>,
    ) -> Json<LanguageResponse> {
        let changed = context.language().set(request.language);
        Json(LanguageResponse {
            language: request.language,
            changed,
        })
    }

    async fn toggle_language(State(context): State<Arc<AppContext>>) -> Json<LanguageResponse> {
        Json(LanguageResponse {
            language: context.language().toggle(),
            changed: true,
        })
    }
}
