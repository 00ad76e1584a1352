// ABOUTME: Health tracker controller: entry submission, profile age, derived views and advice caching
// ABOUTME: Fetches advice at most once per language until the cache is cleared or explicitly refreshed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::RequestSlot;
use crate::errors::{AppError, AppResult};
use crate::gateway::AiGateway;
use crate::intelligence::{cm_from_feet_inches, BmiCategory, HistorySummary, TrendSeries};
use crate::language::{Language, LanguageContext, Message};
use crate::models::{HealthAdvice, HealthEntry};
use crate::records::{AdviceCache, HealthRecordStore, ProfileStore};
use crate::storage::Storage;

/// Source of the entry date
pub type TodayFn = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Height as typed into the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "camelCase")]
pub enum HeightInput {
    /// Centimeters
    Cm {
        /// Height in centimeters
        cm: f64,
    },
    /// Feet and inches, converted to centimeters on submit
    FeetInches {
        /// Whole or fractional feet
        feet: f64,
        /// Inches
        inches: f64,
    },
}

impl HeightInput {
    /// Height in centimeters, `None` when nothing usable was entered
    #[must_use]
    pub fn to_cm(self) -> Option<f64> {
        match self {
            Self::Cm { cm } => Some(cm).filter(|cm| cm.is_finite() && *cm > 0.0),
            Self::FeetInches { feet, inches } => cm_from_feet_inches(feet, inches),
        }
    }
}

/// Tracker form submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NewEntry {
    /// Age in years; the stored profile age is used when absent
    #[serde(default)]
    pub age: Option<u32>,
    /// Height
    pub height: HeightInput,
    /// Weight in kilograms
    pub weight: f64,
}

/// What happened to advice after a tracker change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AdviceOutcome {
    /// Served from the cache, no network call
    Cached {
        /// Cached advice
        advice: HealthAdvice,
    },
    /// Fetched and cached
    Fetched {
        /// New advice
        advice: HealthAdvice,
    },
    /// Fetch failed; the message is localized
    Failed {
        /// User-facing message
        message: String,
    },
    /// A newer refresh started before this one finished
    Superseded,
}

impl AdviceOutcome {
    /// Advice carried by this outcome, if any
    #[must_use]
    pub const fn advice(&self) -> Option<&HealthAdvice> {
        match self {
            Self::Cached { advice } | Self::Fetched { advice } => Some(advice),
            Self::Failed { .. } | Self::Superseded => None,
        }
    }
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryAdded {
    /// The stored entry
    pub entry: HealthEntry,
    /// Category of its BMI
    pub category: BmiCategory,
    /// History length after the append
    pub entries: usize,
    /// Advice state after the append
    pub advice: AdviceOutcome,
}

/// Everything the tracker screen shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerView {
    /// Active language
    pub language: Language,
    /// Stored age text
    pub age: Option<String>,
    /// Full history, oldest first
    pub history: Vec<HealthEntry>,
    /// Latest entry
    pub latest: Option<HealthEntry>,
    /// Latest-value summary
    pub summary: HistorySummary,
    /// Localized category label of the latest BMI
    pub category_label: Option<String>,
    /// Chart projection
    pub trends: TrendSeries,
    /// Cached advice for the active language
    pub advice: Option<HealthAdvice>,
}

/// Health tracker controller
pub struct TrackerController {
    records: HealthRecordStore,
    advice: AdviceCache,
    profile: ProfileStore,
    gateway: AiGateway,
    language: LanguageContext,
    submit_slot: RequestSlot,
    advice_slots: [RequestSlot; 2],
    today: TodayFn,
}

impl TrackerController {
    /// Controller over `storage`, dating entries with the local calendar
    #[must_use]
    pub fn new(storage: &Storage, gateway: AiGateway, language: LanguageContext) -> Self {
        Self {
            records: HealthRecordStore::new(storage.clone()),
            advice: AdviceCache::new(storage.clone()),
            profile: ProfileStore::new(storage.clone()),
            gateway,
            language,
            submit_slot: RequestSlot::new("health entry"),
            advice_slots: [
                RequestSlot::new("health advice (en)"),
                RequestSlot::new("health advice (bn)"),
            ],
            today: Arc::new(|| Local::now().date_naive()),
        }
    }

    /// Replace the date source
    #[must_use]
    pub fn with_today(mut self, today: TodayFn) -> Self {
        self.today = today;
        self
    }

    /// Underlying record store
    #[must_use]
    pub const fn records(&self) -> &HealthRecordStore {
        &self.records
    }

    /// Current screen state; never calls the network
    ///
    /// # Errors
    ///
    /// Returns an error only if the storage backend fails
    pub fn view(&self) -> AppResult<TrackerView> {
        let language = self.language.current();
        let history = self.records.load()?;
        let latest = history.last().cloned();
        Ok(TrackerView {
            language,
            age: self.profile.age_text()?,
            summary: HistorySummary::from_history(&history),
            category_label: latest
                .as_ref()
                .map(|entry| entry.category().label(language).to_owned()),
            trends: TrendSeries::from_history(&history),
            advice: self.advice.get(language)?,
            latest,
            history,
        })
    }

    /// Persist the profile age text
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails
    pub fn set_age(&self, text: &str) -> AppResult<()> {
        self.profile.set_age(text)
    }

    /// Validate and store one entry, then make sure advice exists
    ///
    /// # Errors
    ///
    /// - `ResourceLocked` while a previous submission is still running
    /// - `PreconditionFailed` when no age is known or the measurements give no BMI
    /// - storage errors from the append
    ///
    /// Advice failures do not fail the submission; they are reported in
    /// [`EntryAdded::advice`].
    pub async fn add_entry(&self, form: NewEntry) -> AppResult<EntryAdded> {
        let ticket = self.submit_slot.try_begin()?;
        let language = self.language.current();

        let typed_age = form.age.filter(|age| *age > 0);
        let age = typed_age
            .map_or_else(|| self.profile.age(), |age| Ok(Some(age)))?
            .ok_or_else(|| AppError::precondition(Message::AgeRequiredError.text(language)))?;

        let entry = form
            .height
            .to_cm()
            .and_then(|height| HealthEntry::new((self.today)(), age, height, form.weight))
            .ok_or_else(|| AppError::precondition(Message::InvalidMeasurements.text(language)))?;

        // Only an accepted submission updates the profile
        if let Some(age) = typed_age {
            self.profile.set_age(&age.to_string())?;
        }

        let history = self.records.append(entry.clone())?;
        info!(
            date = %entry.date,
            bmi = entry.bmi,
            entries = history.len(),
            "Health entry stored"
        );

        let advice = self.advice_for(&history, language, false).await?;
        drop(ticket);

        Ok(EntryAdded {
            category: entry.category(),
            entries: history.len(),
            entry,
            advice,
        })
    }

    /// Cached advice for the active language, fetching only on a cache miss
    ///
    /// # Errors
    ///
    /// `PreconditionFailed` when the history is empty (no call is made)
    pub async fn ensure_advice(&self) -> AppResult<AdviceOutcome> {
        let language = self.language.current();
        let history = self.records.load()?;
        self.advice_for(&history, language, false).await
    }

    /// Fetch fresh advice for the active language, replacing the cache
    ///
    /// # Errors
    ///
    /// `PreconditionFailed` when the history is empty (no call is made)
    pub async fn refresh_advice(&self) -> AppResult<AdviceOutcome> {
        let language = self.language.current();
        let history = self.records.load()?;
        self.advice_for(&history, language, true).await
    }

    /// Remove the history and every cached advice payload
    ///
    /// # Errors
    ///
    /// Returns an error if a key cannot be removed
    pub fn clear(&self) -> AppResult<()> {
        self.records.clear()
    }

    /// Keep advice available in the active language as it changes
    ///
    /// Each change with a non-empty history triggers [`Self::ensure_advice`].
    /// A fetch in flight for one language is never discarded by a request
    /// for the other, since the results land under different cache keys.
    pub fn watch_language(self: Arc<Self>) -> JoinHandle<()> {
        let mut receiver = self.language.subscribe();
        tokio::spawn(async move {
            while receiver.changed().await.is_ok() {
                let language = *receiver.borrow_and_update();
                debug!(language = %language, "Language changed, checking advice cache");
                match self.ensure_advice().await {
                    Ok(outcome) => debug!(?outcome, "Advice checked after language change"),
                    Err(e) => debug!(error = %e, "No advice after language change"),
                }
            }
        })
    }

    /// Generation counter for advice in `language`; each language caches separately
    const fn advice_slot(&self, language: Language) -> &RequestSlot {
        match language {
            Language::En => &self.advice_slots[0],
            Language::Bn => &self.advice_slots[1],
        }
    }

    async fn advice_for(
        &self,
        history: &[HealthEntry],
        language: Language,
        force: bool,
    ) -> AppResult<AdviceOutcome> {
        if history.is_empty() {
            return Err(AppError::precondition(
                Message::NoHealthDataError.text(language),
            ));
        }
        if !force {
            if let Some(advice) = self.advice.get(language)? {
                debug!(language = %language, "Advice cache hit");
                return Ok(AdviceOutcome::Cached { advice });
            }
        }

        let ticket = self.advice_slot(language).begin();
        let result = self.gateway.get_health_advice(history, language).await;
        let Some(result) = ticket.finish(result) else {
            return Ok(AdviceOutcome::Superseded);
        };

        match result {
            Ok(advice) => {
                self.advice.put(language, &advice)?;
                Ok(AdviceOutcome::Fetched { advice })
            }
            Err(e) => {
                warn!(language = %language, error = %e, "Health advice unavailable");
                Ok(AdviceOutcome::Failed { message: e.message })
            }
        }
    }
}

impl std::fmt::Debug for TrackerController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerController")
            .field("records", &self.records)
            .field("gateway", &self.gateway)
            .field("submit_slot", &self.submit_slot)
            .field("advice_slots", &self.advice_slots)
            .finish_non_exhaustive()
    }
}
