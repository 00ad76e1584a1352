// ABOUTME: HealthEntry, one immutable snapshot of age, height, weight and derived BMI
// ABOUTME: BMI is computed once at creation and stored so history survives formula changes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::intelligence::{bmi, BmiCategory};

/// One longitudinal health record
///
/// `date` serializes as `YYYY-MM-DD`, which sorts lexically in date order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthEntry {
    /// Local calendar date the entry was created
    pub date: NaiveDate,
    /// Age in years
    pub age: u32,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Body mass index at creation time
    pub bmi: f64,
}

impl HealthEntry {
    /// Build an entry, deriving BMI from height and weight
    ///
    /// Returns `None` when age is zero or BMI is not computable.
    #[must_use]
    pub fn new(date: NaiveDate, age: u32, height_cm: f64, weight_kg: f64) -> Option<Self> {
        let bmi = bmi(height_cm, weight_kg);
        if age == 0 || bmi <= 0.0 {
            return None;
        }
        Some(Self {
            date,
            age,
            height: height_cm,
            weight: weight_kg,
            bmi,
        })
    }

    /// Category of the stored BMI
    #[must_use]
    pub fn category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi)
    }

    /// Sentence describing this entry, embedded in AI prompts
    #[must_use]
    pub fn prompt_description(&self) -> String {
        format!(
            "Age: {} years, Height: {} cm, Weight: {} kg, BMI: {:.2}",
            self.age, self.height, self.weight, self.bmi
        )
    }
}
