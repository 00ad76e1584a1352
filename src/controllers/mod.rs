// ABOUTME: View controllers orchestrating input capture, gateway calls and record updates per feature
// ABOUTME: Also defines RequestSlot, the per-feature generation counter that discards superseded results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! # View Controllers
//!
//! Each feature (chat, tracker, diet, exercise, fun fact) has one
//! controller. Feature errors end here; nothing a controller returns is
//! fatal to the process or touches another feature's state.
//!
//! ## Request generations
//!
//! Every controller owns a [`RequestSlot`]. A form submission takes a
//! ticket with [`RequestSlot::try_begin`], which refuses while an earlier
//! submission of the same form is still loading. Background refreshes take
//! one with [`RequestSlot::begin`], which always succeeds and supersedes any
//! in-flight ticket. [`RequestTicket::finish`] only hands the result back
//! when no newer ticket was issued meanwhile.

/// Symptom chat
pub mod chat;
/// Diet planner
pub mod diet;
/// Exercise planner
pub mod exercise;
/// Fun fact banner
pub mod fun_fact;
/// Health tracker
pub mod tracker;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;

pub use chat::ChatController;
pub use diet::{DietController, DietOptions};
pub use exercise::{ExerciseController, ExerciseOptions};
pub use fun_fact::FunFactController;
pub use tracker::{AdviceOutcome, EntryAdded, HeightInput, NewEntry, TrackerController, TrackerView};

/// Monotonic request counter for one feature
#[derive(Debug)]
pub struct RequestSlot {
    feature: &'static str,
    newest: AtomicU64,
    settled: AtomicU64,
}

impl RequestSlot {
    /// Empty slot for `feature`
    #[must_use]
    pub const fn new(feature: &'static str) -> Self {
        Self {
            feature,
            newest: AtomicU64::new(0),
            settled: AtomicU64::new(0),
        }
    }

    /// Feature name used in logs and busy errors
    #[must_use]
    pub const fn feature(&self) -> &'static str {
        self.feature
    }

    /// Issue a new ticket, superseding any in-flight one
    pub fn begin(&self) -> RequestTicket<'_> {
        let id = self.newest.fetch_add(1, Ordering::AcqRel) + 1;
        RequestTicket { slot: self, id }
    }

    /// Issue a new ticket unless a request is still loading
    ///
    /// # Errors
    ///
    /// Returns `ResourceLocked` while the newest ticket is unfinished
    pub fn try_begin(&self) -> AppResult<RequestTicket<'_>> {
        let mut current = self.newest.load(Ordering::Acquire);
        loop {
            if self.settled.load(Ordering::Acquire) < current {
                return Err(AppError::busy(self.feature));
            }
            match self.newest.compare_exchange(
                current,
                current + 1,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    return Ok(RequestTicket {
                        slot: self,
                        id: current + 1,
                    })
                }
                Err(actual) => current = actual,
            }
        }
    }

    /// True while the newest ticket is unfinished
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.settled.load(Ordering::Acquire) < self.newest.load(Ordering::Acquire)
    }

    /// Id of the most recently issued ticket
    #[must_use]
    pub fn newest(&self) -> u64 {
        self.newest.load(Ordering::Acquire)
    }
}

/// Handle for one issued request
///
/// Dropping a ticket without finishing it (for example when the caller
/// goes away mid-request) still releases the loading state.
#[derive(Debug)]
#[must_use]
pub struct RequestTicket<'a> {
    slot: &'a RequestSlot,
    id: u64,
}

impl RequestTicket<'_> {
    /// Generation number of this ticket
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// True when no newer ticket has been issued
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.slot.newest() == self.id
    }

    /// Hand back `value` if this ticket is still the newest, otherwise discard it
    pub fn finish<T>(self, value: T) -> Option<T> {
        if self.is_current() {
            Some(value)
        } else {
            AppLogger::log_stale_result(self.slot.feature, self.id, self.slot.newest());
            None
        }
    }
}

impl Drop for RequestTicket<'_> {
    fn drop(&mut self) {
        if self.is_current() {
            self.slot.settled.fetch_max(self.id, Ordering::AcqRel);
        }
    }
}
