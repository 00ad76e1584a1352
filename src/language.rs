// ABOUTME: Two-valued language selection, a subscribable language context and localized messages
// ABOUTME: Drives both user-facing text and the output language requested from the AI gateway
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! # Language
//!
//! [`Language`] selects English or Bengali. [`LanguageContext`] is the
//! explicit, injectable holder of the active language; components that need
//! to react to a change call [`LanguageContext::subscribe`] and receive a
//! `tokio::sync::watch` receiver that only wakes on actual changes.
//!
//! Changing language never retranslates stored AI results. Cached advice for
//! the other language is picked up or refreshed lazily on the next read.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

use crate::constants::storage_keys;
use crate::errors::AppError;

/// Output and interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default)
    #[default]
    En,
    /// Bengali
    Bn,
}

impl Language {
    /// Environment variable for the initial language
    pub const ENV_VAR: &'static str = "PORAMORSHOK_LANGUAGE";

    /// All supported languages
    pub const ALL: [Self; 2] = [Self::En, Self::Bn];

    /// Short code (`en` / `bn`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Bn => "bn",
        }
    }

    /// Parse leniently, falling back to English
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// The other language
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Bn,
            Self::Bn => Self::En,
        }
    }

    /// Language name used in short prompt instructions
    #[must_use]
    pub const fn instruction_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Bn => "Bengali",
        }
    }

    /// Language name used in long-form plan prompts
    #[must_use]
    pub const fn plan_instruction_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Bn => "fluent Bengali",
        }
    }

    /// Storage key of the advice cache for this language
    #[must_use]
    pub fn advice_storage_key(self) -> String {
        format!("{}{}", storage_keys::HEALTH_ADVICE_PREFIX, self.as_str())
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "bn" | "bengali" | "bangla" => Ok(Self::Bn),
            other => Err(AppError::invalid_input(format!(
                "Unsupported language '{other}', expected 'en' or 'bn'"
            ))),
        }
    }
}

// ============================================================================
// Language Context
// ============================================================================

/// Shared handle to the active language
///
/// Cloning yields another handle to the same state.
#[derive(Debug, Clone)]
pub struct LanguageContext {
    sender: Arc<watch::Sender<Language>>,
}

impl LanguageContext {
    /// Create a context starting at `initial`
    #[must_use]
    pub fn new(initial: Language) -> Self {
        let (sender, _receiver) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Active language
    #[must_use]
    pub fn current(&self) -> Language {
        *self.sender.borrow()
    }

    /// Set the active language, returning true if it changed
    ///
    /// Subscribers are only notified on an actual change.
    pub fn set(&self, language: Language) -> bool {
        let changed = self.sender.send_if_modified(|current| {
            if *current == language {
                false
            } else {
                *current = language;
                true
            }
        });
        if changed {
            debug!(language = %language, "Active language changed");
        }
        changed
    }

    /// Switch to the other language and return it
    pub fn toggle(&self) -> Language {
        let next = self.current().toggled();
        self.set(next);
        next
    }

    /// Receiver that observes every subsequent change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.sender.subscribe()
    }
}

impl Default for LanguageContext {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

// ============================================================================
// Localized Messages
// ============================================================================

/// User-visible strings the core itself produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Message {
    /// Advice could not be fetched
    FetchAdviceError,
    /// Tracker history is empty
    NoHealthDataError,
    /// Profile age missing when adding an entry
    AgeRequiredError,
    /// Prefix for a failed chat reply
    AiProcessError,
    /// Fallback for unclassified failures
    UnknownError,
    /// Shown above a symptom analysis
    AnalysisDisclaimer,
    /// Symptom text was empty
    EmptySymptomsError,
    /// Symptom analysis call failed
    AnalysisFailed,
    /// Diet plan call failed
    DietPlanFailed,
    /// Exercise plan call failed
    ExercisePlanFailed,
    /// Exercise plan needs a tracker entry
    HealthDataRequired,
    /// Height and weight do not yield a BMI
    InvalidMeasurements,
    /// Export title
    DietPlanTitle,
    /// Export label for the goal
    HealthGoalLabel,
    /// Export label for the preference
    DietaryPreferenceLabel,
    /// Export heading for the summary
    PlanSummary,
    /// Export label for the daily note
    DailyNote,
    /// Disclaimer appended to exports
    ExportDisclaimer,
}

impl Message {
    /// Text of this message in `language`
    #[must_use]
    pub const fn text(self, language: Language) -> &'static str {
        match language {
            Language::En => self.english(),
            Language::Bn => self.bengali(),
        }
    }

    const fn english(self) -> &'static str {
        match self {
            Self::FetchAdviceError => "Sorry, I couldn't fetch health advice at this moment.",
            Self::NoHealthDataError => {
                "No health data found. Please add an entry in the Health Tracker first."
            }
            Self::AgeRequiredError => "Please enter your age in your profile to add an entry.",
            Self::AiProcessError => "Sorry, I couldn't process that.",
            Self::UnknownError => "An unknown error occurred.",
            Self::AnalysisDisclaimer => "Here is a potential analysis based on the symptoms you provided. Please remember this is not a medical diagnosis.",
            Self::EmptySymptomsError => "Please describe your symptoms first.",
            Self::AnalysisFailed => "Failed to get analysis from AI. Please try again.",
            Self::DietPlanFailed => "Failed to generate diet plan. Please try again.",
            Self::ExercisePlanFailed => "Failed to generate exercise plan. Please try again.",
            Self::HealthDataRequired => "Health data is required to generate an exercise plan.",
            Self::InvalidMeasurements => "Please enter a valid height and weight.",
            Self::DietPlanTitle => "Your 7-Day Diet Plan",
            Self::HealthGoalLabel => "Health Goal",
            Self::DietaryPreferenceLabel => "Dietary Preference",
            Self::PlanSummary => "Plan Summary",
            Self::DailyNote => "Daily Note",
            Self::ExportDisclaimer => "Disclaimer: The information provided by পরামর্শক AI is for informational purposes only and is not a substitute for professional medical advice, diagnosis, or treatment. Always seek the advice of your physician or other qualified health provider with any questions you may have regarding a medical condition.",
        }
    }

    const fn bengali(self) -> &'static str {
        match self {
            Self::FetchAdviceError => "দুঃখিত, এই মুহূর্তে স্বাস্থ্য পরামর্শ আনা সম্ভব হচ্ছে না।",
            Self::NoHealthDataError => "কোন স্বাস্থ্য তথ্য পাওয়া যায়নি। অনুগ্রহ করে প্রথমে স্বাস্থ্য ট্র্যাকারে একটি তথ্য যোগ করুন।",
            Self::AgeRequiredError => {
                "একটি তথ্য যোগ করার জন্য অনুগ্রহ করে আপনার প্রোফাইলে বয়স লিখুন।"
            }
            Self::AiProcessError => "দুঃখিত, আমি এটি প্রক্রিয়া করতে পারিনি।",
            Self::UnknownError => "একটি অজানা ত্রুটি ঘটেছে।",
            Self::AnalysisDisclaimer => "আপনার দেওয়া লক্ষণগুলির উপর ভিত্তি করে এখানে একটি সম্ভাব্য বিশ্লেষণ দেওয়া হলো। দয়া করে মনে রাখবেন এটি কোনও ডাক্তারি রোগনির্ণয় নয়।",
            Self::EmptySymptomsError => "অনুগ্রহ করে প্রথমে আপনার লক্ষণগুলি লিখুন।",
            Self::AnalysisFailed => "এআই থেকে বিশ্লেষণ পাওয়া যায়নি। অনুগ্রহ করে আবার চেষ্টা করুন।",
            Self::DietPlanFailed => "ডায়েট প্ল্যান তৈরি করা যায়নি। অনুগ্রহ করে আবার চেষ্টা করুন।",
            Self::ExercisePlanFailed => {
                "ব্যায়াম পরিকল্পনা তৈরি করা যায়নি। অনুগ্রহ করে আবার চেষ্টা করুন।"
            }
            Self::HealthDataRequired => {
                "ব্যায়াম পরিকল্পনা তৈরি করতে স্বাস্থ্য তথ্য প্রয়োজন।"
            }
            Self::InvalidMeasurements => "অনুগ্রহ করে সঠিক উচ্চতা ও ওজন লিখুন।",
            Self::DietPlanTitle => "আপনার ৭-দিনের ডায়েট প্ল্যান",
            Self::HealthGoalLabel => "স্বাস্থ্য লক্ষ্য",
            Self::DietaryPreferenceLabel => "খাদ্য পছন্দ",
            Self::PlanSummary => "পরিকল্পনার সারসংক্ষেপ",
            Self::DailyNote => "দৈনিক নোট",
            Self::ExportDisclaimer => "দাবিত্যাগ: পরামর্শক AI দ্বারা প্রদত্ত তথ্য শুধুমাত্র তথ্যগত উদ্দেশ্যে এবং পেশাদার চিকিৎসা পরামর্শ, রোগ নির্ণয় বা চিকিৎসার বিকল্প নয়। যেকোনো চিকিৎসা সংক্রান্ত প্রশ্ন থাকলে সর্বদা আপনার চিকিৎসক বা অন্য যোগ্য স্বাস্থ্য প্রদানকারীর পরামর্শ নিন।",
        }
    }
}
