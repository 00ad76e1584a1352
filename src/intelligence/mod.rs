// ABOUTME: Intelligence module with the deterministic body-metric math behind the tracker
// ABOUTME: Height conversion, BMI, BMI category and chart-ready trend projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! # Intelligence Module
//!
//! Pure, side-effect free calculations. Everything here is synchronous and
//! never fails; impossible inputs yield sentinel values (`0.0` BMI) or `None`.

/// Height conversion, BMI and BMI category
pub mod body_metrics;
/// Chart projection and summaries over the health history
pub mod trends;

pub use body_metrics::{
    bmi, bmi_scale_position, cm_from_feet_inches, feet_inches_from_cm, round_to, BmiCategory,
    FeetInches,
};
pub use trends::{AxisDomain, HistorySummary, TrendPoint, TrendSeries};
