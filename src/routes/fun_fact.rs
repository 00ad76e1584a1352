// ABOUTME: Fun fact route; always answers 200 with either a fresh or a fallback fact
// ABOUTME: Reads the active language at request time and never returns an error status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::language::Language;

/// Fun fact response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunFactResponse {
    /// Language requested
    pub language: Language,
    /// The fact
    pub fact: String,
}

/// Fun fact routes implementation
pub struct FunFactRoutes;

impl FunFactRoutes {
    /// Create the fun fact route
    pub fn routes(context: Arc<AppContext>) -> Router {
        Router::new()
            .route("/api/fun-fact", get(Self::fun_fact))
            .with_state(context)
    }

    async fn fun_fact(State(context): State<Arc<AppContext>>) -> Json<FunFactResponse> {
        let language = context.language().current();
        let fact = context.fun_fact().fetch().await;
        Json(FunFactResponse { language, fact })
    }
}
