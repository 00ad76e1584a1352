// ABOUTME: Main library entry point for the Poramorshok health assistant core
// ABOUTME: Exposes BMI math, local health records, the Gemini gateway, controllers and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Poramorshok
//!
//! Core of a bilingual (English / Bengali) personal health assistant.
//!
//! ## Features
//!
//! - **Body metrics**: BMI computation, category classification and
//!   feet/inches conversion
//! - **Health tracker**: a date-ordered history of measurements persisted in a
//!   local key-value store, with per-language cached AI advice
//! - **AI gateway**: schema-constrained Gemini calls for symptom analysis,
//!   advice, 7-day diet and exercise plans, and a fun fact
//! - **Controllers**: per-feature state with request-generation tokens so a
//!   superseded AI response never overwrites a newer one
//! - **Surfaces**: an axum HTTP server (`poramorshok-server`) and a command
//!   line tool (`poramorshok-cli`)
//!
//! ## Architecture
//!
//! - **Intelligence**: pure BMI and trend computations
//! - **Records**: typed stores over the [`storage::Storage`] key-value facade
//! - **LLM**: the [`llm::LlmProvider`] trait and its Gemini implementation
//! - **Gateway**: prompts, response schemas and decoding on top of a provider
//! - **Controllers**: feature orchestration shared by both surfaces
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use poramorshok::config::AppConfig;
//! use poramorshok::context::AppContext;
//! use poramorshok::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let context = AppContext::from_config(AppConfig::from_env()?)?;
//!     let view = context.tracker().view()?;
//!     println!("{} entries tracked", view.history.len());
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants: storage keys, BMI thresholds, AI defaults
pub mod constants;

/// Dependency container shared by the binaries and the HTTP layer
pub mod context;

/// Feature controllers and request-generation tokens
pub mod controllers;

/// Unified error handling
pub mod errors;

/// Diet plan export formatting
pub mod formatters;

/// Typed AI operations: prompts, schemas and decoding
pub mod gateway;

/// BMI, unit conversion and history trends
pub mod intelligence;

/// Language selection and localized messages
pub mod language;

/// LLM provider abstraction and the Gemini client
pub mod llm;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: request ids, tracing spans and CORS
pub mod middleware;

/// Domain data models
pub mod models;

/// Persisted health history, advice cache, chat history and profile
pub mod records;

/// `HTTP` route handlers
pub mod routes;

/// Key-value storage backends
pub mod storage;
