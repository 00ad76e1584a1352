// ABOUTME: Request id generation and per-request tracing spans for the HTTP API
// ABOUTME: Ids look like req_<uuid>; an id supplied by the client is kept
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

use crate::constants::http::REQUEST_ID_HEADER;

/// Generates `req_<uuid>` correlation ids
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdGenerator;

impl RequestIdGenerator {
    /// A fresh request id
    #[must_use]
    pub fn generate() -> String {
        format!("req_{}", Uuid::new_v4().simple())
    }
}

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Self::generate())
            .ok()
            .map(RequestId::new)
    }
}

/// Create a tracing span for an HTTP request
pub fn make_request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let first = RequestIdGenerator::generate();
        let second = RequestIdGenerator::generate();
        assert!(first.starts_with("req_"));
        assert_eq!(first.len(), 4 + 32);
        assert_ne!(first, second);
    }
}
