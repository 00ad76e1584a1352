// ABOUTME: Body-metric conversions between centimeters and feet/inches plus BMI math
// ABOUTME: Stateless, infallible functions with sentinel results for unusable inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! Body Metrics
//!
//! Height is canonical in centimeters. Feet and inches only exist at the
//! input/display edge and are converted before anything is stored.
//!
//! BMI follows the WHO adult definition `weight_kg / height_m^2` with the
//! standard cut-offs. Comparisons are strict, so a boundary value belongs to
//! the higher category: 18.5 is normal, 25 is overweight, 30 is obese.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::constants::bmi::{
    NORMAL_BELOW, OVERWEIGHT_BELOW, SCALE_MAX, SCALE_MIN, UNDERWEIGHT_BELOW,
};
use crate::constants::units::{CM_PER_INCH, CM_PER_METER, INCHES_PER_FOOT};
use crate::language::Language;

/// Height split into whole feet and fractional inches
///
/// `inches` keeps full precision so converting back lands within 0.1 cm;
/// use [`FeetInches::display_inches`] for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInches {
    /// Whole feet
    pub feet: u32,
    /// Remaining inches
    pub inches: f64,
}

impl FeetInches {
    /// Remaining inches rounded to one decimal
    #[must_use]
    pub fn display_inches(&self) -> f64 {
        round_to(self.inches, 1)
    }
}

impl Display for FeetInches {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}' {:.1}\"", self.feet, self.display_inches())
    }
}

/// Round `value` to `decimals` places, half away from zero
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// Convert feet and inches to centimeters, rounded to one decimal
///
/// Returns `None` when the total is not positive, which callers treat as
/// "no height entered".
#[must_use]
pub fn cm_from_feet_inches(feet: f64, inches: f64) -> Option<f64> {
    let total_inches = feet.max(0.0).mul_add(INCHES_PER_FOOT, inches.max(0.0));
    if !total_inches.is_finite() || total_inches <= 0.0 {
        return None;
    }
    Some(round_to(total_inches * CM_PER_INCH, 1))
}

/// Convert centimeters to whole feet plus remaining inches
///
/// Returns `None` for non-positive or non-finite input.
#[must_use]
pub fn feet_inches_from_cm(cm: f64) -> Option<FeetInches> {
    if !cm.is_finite() || cm <= 0.0 {
        return None;
    }
    let total_inches = cm / CM_PER_INCH;
    let feet = (total_inches / INCHES_PER_FOOT).floor();
    Some(FeetInches {
        feet: feet as u32,
        inches: total_inches % INCHES_PER_FOOT,
    })
}

/// Body mass index from height in centimeters and weight in kilograms
///
/// Returns `0.0` when either input is not positive. Never panics.
#[must_use]
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if !(height_cm > 0.0 && weight_kg > 0.0) {
        return 0.0;
    }
    let height_m = height_cm / CM_PER_METER;
    let value = weight_kg / (height_m * height_m);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Position of `bmi` on the 15-40 gauge as a percentage clamped to 0-100
#[must_use]
pub fn bmi_scale_position(bmi: f64) -> f64 {
    let percent = (bmi - SCALE_MIN) / (SCALE_MAX - SCALE_MIN) * 100.0;
    percent.clamp(0.0, 100.0)
}

/// WHO adult BMI category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// 18.5 up to but excluding 25
    Normal,
    /// 25 up to but excluding 30
    Overweight,
    /// 30 and above
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_BELOW {
            Self::Underweight
        } else if bmi < NORMAL_BELOW {
            Self::Normal
        } else if bmi < OVERWEIGHT_BELOW {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Label used inside AI prompts
    #[must_use]
    pub const fn prompt_label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }

    /// Localized display label
    #[must_use]
    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Underweight, Language::En) => "Underweight",
            (Self::Normal, Language::En) => "Normal",
            (Self::Overweight, Language::En) => "Overweight",
            (Self::Obese, Language::En) => "Obese",
            (Self::Underweight, Language::Bn) => "কম ওজন",
            (Self::Normal, Language::Bn) => "স্বাভাবিক",
            (Self::Overweight, Language::Bn) => "অতিরিক্ত ওজন",
            (Self::Obese, Language::Bn) => "স্থূল",
        }
    }
}

impl Display for BmiCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.label(Language::En))
    }
}
