// ABOUTME: Chart-ready projection of the health history and latest-value summaries
// ABOUTME: Computes padded axis domains for weight and BMI over the stored entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::body_metrics::{bmi_scale_position, round_to, BmiCategory};
use crate::constants::bmi::{CHART_PADDING, WEIGHT_CHART_PADDING};
use crate::models::HealthEntry;

/// One chart sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Entry date
    pub date: NaiveDate,
    /// Weight in kilograms
    pub weight: f64,
    /// BMI
    pub bmi: f64,
}

/// Inclusive axis range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl AxisDomain {
    fn padded(values: impl Iterator<Item = f64>, padding: f64) -> Option<Self> {
        values
            .fold(None, |acc: Option<(f64, f64)>, value| {
                Some(acc.map_or((value, value), |(lo, hi)| (lo.min(value), hi.max(value))))
            })
            .map(|(lo, hi)| Self {
                min: lo - padding,
                max: hi + padding,
            })
    }
}

/// Weight and BMI series in date order with padded axis domains
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Samples in history order
    pub points: Vec<TrendPoint>,
    /// Weight axis, absent for an empty history
    pub weight_domain: Option<AxisDomain>,
    /// BMI axis, absent for an empty history
    pub bmi_domain: Option<AxisDomain>,
}

impl TrendSeries {
    /// Project a date-sorted history
    #[must_use]
    pub fn from_history(history: &[HealthEntry]) -> Self {
        let points: Vec<TrendPoint> = history
            .iter()
            .map(|entry| TrendPoint {
                date: entry.date,
                weight: entry.weight,
                bmi: entry.bmi,
            })
            .collect();

        Self {
            weight_domain: AxisDomain::padded(points.iter().map(|p| p.weight), WEIGHT_CHART_PADDING),
            bmi_domain: AxisDomain::padded(points.iter().map(|p| p.bmi), CHART_PADDING),
            points,
        }
    }

    /// True when there is nothing to draw
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Latest-value summary shown above the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySummary {
    /// Number of stored entries
    pub entries: usize,
    /// Latest weight in kilograms
    pub latest_weight: Option<f64>,
    /// Latest BMI rounded to two decimals
    pub latest_bmi: Option<f64>,
    /// Category of the latest BMI
    pub category: Option<BmiCategory>,
    /// Gauge position of the latest BMI, 0-100
    pub scale_position: Option<f64>,
}

impl HistorySummary {
    /// Summarize a date-sorted history
    #[must_use]
    pub fn from_history(history: &[HealthEntry]) -> Self {
        let latest = history.last();
        Self {
            entries: history.len(),
            latest_weight: latest.map(|e| e.weight),
            latest_bmi: latest.map(|e| round_to(e.bmi, 2)),
            category: latest.map(HealthEntry::category),
            scale_position: latest.map(|e| bmi_scale_position(e.bmi)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(day: u32, weight: f64) -> Option<HealthEntry> {
        HealthEntry::new(NaiveDate::from_ymd_opt(2024, 1, day)?, 30, 170.0, weight)
    }

    #[test]
    fn test_empty_history_has_no_domains() {
        let series = TrendSeries::from_history(&[]);
        assert!(series.is_empty());
        assert!(series.bmi_domain.is_none());
        assert!(series.weight_domain.is_none());
    }

    #[test]
    fn test_domains_are_padded() {
        let history: Vec<HealthEntry> = [entry(1, 70.0), entry(2, 80.0)]
            .into_iter()
            .flatten()
            .collect();
        let series = TrendSeries::from_history(&history);
        let weight = series.weight_domain.map(|d| (d.min, d.max));
        assert_eq!(weight, Some((68.0, 82.0)));
        let bmi = series.bmi_domain.map(|d| (d.min, d.max));
        let expected_low = history[0].bmi - 1.0;
        let expected_high = history[1].bmi + 1.0;
        assert_eq!(bmi, Some((expected_low, expected_high)));
    }
}
