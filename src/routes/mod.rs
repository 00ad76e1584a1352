// ABOUTME: Route module organization for the Poramorshok HTTP API
// ABOUTME: Assembles per-feature routers and wraps them in request-id, tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! Route module for the local JSON API
//!
//! Each feature module contains only route definitions and thin handlers
//! that delegate to the controllers in [`crate::controllers`].

/// Symptom chat routes
pub mod chat;
/// Fun fact route
pub mod fun_fact;
/// Liveness route
pub mod health;
/// Language state routes
pub mod language;
/// Diet and exercise planner routes
pub mod planner;
/// Health tracker routes
pub mod tracker;

use std::sync::Arc;

use axum::{http::HeaderName, Router};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

pub use chat::ChatRoutes;
pub use fun_fact::FunFactRoutes;
pub use health::HealthRoutes;
pub use language::LanguageRoutes;
pub use planner::PlannerRoutes;
pub use tracker::TrackerRoutes;

use crate::constants::http::REQUEST_ID_HEADER;
use crate::context::AppContext;
use crate::middleware::{make_request_span, setup_cors, RequestIdGenerator};

/// Build the complete router with middleware
pub fn build_router(context: Arc<AppContext>) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);
    let cors = setup_cors(&context.config().http);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&context)))
        .merge(LanguageRoutes::routes(Arc::clone(&context)))
        .merge(TrackerRoutes::routes(Arc::clone(&context)))
        .merge(ChatRoutes::routes(Arc::clone(&context)))
        .merge(PlannerRoutes::routes(Arc::clone(&context)))
        .merge(FunFactRoutes::routes(context))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    RequestIdGenerator,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(make_request_span::<axum::body::Body>)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(request_id_header))
                .layer(cors),
        )
}
