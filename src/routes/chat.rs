// ABOUTME: Symptom chat routes for reading, sending and clearing the transcript
// ABOUTME: A failed analysis answers with an error body after recording the failure message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::errors::AppError;
use crate::models::ChatMessage;

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    /// Free-text symptom description
    pub message: String,
}

/// Transcript response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    /// Messages, oldest first
    pub messages: Vec<ChatMessage>,
}

/// Chat routes implementation
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create all chat routes
    pub fn routes(context: Arc<AppContext>) -> Router {
        Router::new()
            .route(
                "/api/chat",
                get(Self::history)
                    .post(Self::send_message)
                    .delete(Self::clear),
            )
            .with_state(context)
    }

    async fn history(State(context): State<Arc<AppContext>>) -> Result<Response, AppError> {
        let messages = context.chat().history()?;
        Ok((StatusCode::OK, Json(ChatHistoryResponse { messages })).into_response())
    }

    async fn send_message(
        State(context): State<Arc<AppContext>>,
        Json(request): Json<SendMessageRequest>,
    ) -> Result<Response, AppError> {
        let reply = context.chat().send(&request.message).await?;
        Ok((StatusCode::OK, Json(reply)).into_response())
    }

    async fn clear(State(context): State<Arc<AppContext>>) -> Result<Response, AppError> {
        context.chat().clear()?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
