// ABOUTME: HTTP middleware for request correlation, tracing spans and browser CORS access
// ABOUTME: Layers are applied once around the whole router in routes::build_router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

/// CORS configuration
pub mod cors;
/// Request ids and spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{make_request_span, RequestIdGenerator};
