// ABOUTME: Key-value persistence port used by the record stores and advice cache
// ABOUTME: Synchronous string store with in-memory and JSON-file backends behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! # Local Storage
//!
//! A small key-value abstraction in the shape of browser local storage:
//! string keys, JSON-encoded string values, get/set/remove. Reads and writes
//! are synchronous and never suspend.
//!
//! Backends:
//! - [`memory::InMemoryStore`]: `DashMap`-backed, used by tests and `PORAMORSHOK_STORAGE=memory`
//! - [`file::FileStore`]: the same map mirrored to a JSON file, written atomically on every change
//!
//! [`factory::Storage`] wraps a backend and adds typed JSON helpers.

/// Backend selection and typed JSON helpers
pub mod factory;
/// JSON file backend
pub mod file;
/// In-memory backend
pub mod memory;

pub use factory::Storage;

use crate::errors::AppResult;

/// Minimal key-value store contract
///
/// Implementations must be safe to share across threads; values are opaque
/// strings and the store never interprets them.
pub trait KeyValueStore: Send + Sync {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Remove a value, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&self, key: &str) -> AppResult<bool>;

    /// All keys currently present, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn keys(&self) -> AppResult<Vec<String>>;
}
