// ABOUTME: Configuration module for environment-driven application settings
// ABOUTME: Re-exports the typed config structs and lenient enum parsers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! Configuration is read from environment variables only; there are no
//! configuration files.

/// Environment-derived application configuration
pub mod environment;
/// Typed enums shared by configuration sections
pub mod types;

pub use environment::{AppConfig, GeminiConfig, HttpConfig, StorageConfig};
pub use types::{Environment, LogLevel, StorageBackend};
