// ABOUTME: Typed stores over local storage for health history, advice cache, chat and profile
// ABOUTME: Each store owns its storage keys and recovers silently from corrupted values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! # Record Stores
//!
//! Thin, typed views over [`Storage`](crate::storage::Storage). None of them
//! surface a decode failure: a corrupted value is removed and treated as the
//! empty default.

/// Per-language cache of AI health advice
pub mod advice_cache;
/// Symptom chat transcript
pub mod chat_history;
/// Date-ordered health entries
pub mod health_history;
/// Profile fields shared by tracker forms
pub mod profile;

pub use advice_cache::AdviceCache;
pub use chat_history::ChatHistoryStore;
pub use health_history::HealthRecordStore;
pub use profile::ProfileStore;
