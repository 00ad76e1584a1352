// ABOUTME: Constants module grouping storage keys, BMI thresholds and AI defaults
// ABOUTME: Keeps magic numbers and persisted key names in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! Application constants organized by domain

pub mod units;

/// Keys used in the local key-value store; values are JSON-encoded strings
pub mod storage_keys {
    /// `list<ChatMessage>`
    pub const CHAT_HISTORY: &str = "chatHistory";
    /// `list<HealthEntry>`
    pub const HEALTH_HISTORY: &str = "healthHistory";
    /// Profile age, stored as a raw string
    pub const USER_AGE: &str = "userAge";
    /// Prefix for the per-language advice cache (`healthAdvice_en`, `healthAdvice_bn`)
    pub const HEALTH_ADVICE_PREFIX: &str = "healthAdvice_";
    /// Language last chosen from the CLI
    pub const LANGUAGE: &str = "language";
}

/// Service identifiers used in logs
pub mod service_names {
    /// Server binary name
    pub const PORAMORSHOK_SERVER: &str = "poramorshok-server";
    /// CLI binary name
    pub const PORAMORSHOK_CLI: &str = "poramorshok-cli";
    /// Name shown in AI prompts
    pub const ASSISTANT_NAME: &str = "পরামর্শক AI";
}

/// Body mass index thresholds and gauge scale
pub mod bmi {
    /// Below this is underweight
    pub const UNDERWEIGHT_BELOW: f64 = 18.5;
    /// Below this (and at or above underweight) is normal
    pub const NORMAL_BELOW: f64 = 25.0;
    /// Below this (and at or above normal) is overweight
    pub const OVERWEIGHT_BELOW: f64 = 30.0;
    /// Gauge lower bound
    pub const SCALE_MIN: f64 = 15.0;
    /// Gauge upper bound
    pub const SCALE_MAX: f64 = 40.0;
    /// Padding added on both sides of the BMI chart axis
    pub const CHART_PADDING: f64 = 1.0;
    /// Padding added on both sides of the weight chart axis, in kilograms
    pub const WEIGHT_CHART_PADDING: f64 = 2.0;
}

/// AI gateway defaults
pub mod llm {
    /// Default Gemini model
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    /// Generative Language API base URL
    pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
    /// Number of daily entries every generated plan must contain
    pub const PLAN_DAYS: usize = 7;
    /// Fun fact used when the AI call fails, English
    pub const FALLBACK_FUN_FACT_EN: &str = "Fun fact: Laughing can boost your immune system!";
    /// Fun fact used when the AI call fails, Bengali
    pub const FALLBACK_FUN_FACT_BN: &str =
        "মজার তথ্য: হাসলে আপনার রোগ প্রতিরোধ ক্ষমতা শক্তিশালী হতে পারে!";
}

/// HTTP defaults for the local API server
pub mod http {
    /// Loopback bind address
    pub const DEFAULT_HOST: &str = "127.0.0.1";
    /// Default port
    pub const DEFAULT_PORT: u16 = 8088;
    /// Header carrying the per-request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}
