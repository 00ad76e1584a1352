// ABOUTME: Export formats for generated plans: Markdown documents and pretty JSON
// ABOUTME: Markdown layout and labels follow the active language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

//! Plan export
//!
//! ```rust
//! use poramorshok::formatters::ExportFormat;
//!
//! assert_eq!(ExportFormat::from_str_param("JSON"), ExportFormat::Json);
//! assert_eq!(ExportFormat::Markdown.content_type(), "text/markdown; charset=utf-8");
//! ```

use std::fmt::{self, Write as _};

use crate::errors::AppResult;
use crate::language::{Language, Message};
use crate::models::{DietGoal, DietPlan, DietaryPreference};

/// Base name of exported diet plan files
pub const DIET_PLAN_FILE_STEM: &str = "7-Day-Diet-Plan";

/// Export format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Markdown document (default)
    #[default]
    Markdown,
    /// Pretty-printed JSON
    Json,
}

impl ExportFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Markdown` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Markdown,
        }
    }

    /// MIME content type
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown; charset=utf-8",
            Self::Json => "application/json",
        }
    }

    /// File extension without the dot
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    /// Format name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered export with its metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    /// Document text
    pub data: String,
    /// Format used
    pub format: ExportFormat,
    /// MIME content type
    pub content_type: &'static str,
    /// Suggested download name
    pub file_name: String,
}

/// Render a diet plan as a Markdown document
#[must_use]
pub fn diet_plan_markdown(
    plan: &DietPlan,
    goal: DietGoal,
    preference: DietaryPreference,
    language: Language,
) -> String {
    let mut doc = String::new();
    // Writing into a String cannot fail
    let _ = write!(
        doc,
        "# {}\n\n**{}:** {}\n**{}:** {}\n\n## {}\n{}\n\n---\n\n",
        Message::DietPlanTitle.text(language),
        Message::HealthGoalLabel.text(language),
        goal.label(language),
        Message::DietaryPreferenceLabel.text(language),
        preference.label(language),
        Message::PlanSummary.text(language),
        plan.summary,
    );

    for day in &plan.plan {
        let _ = write!(
            doc,
            "## {}\n\n**{}:** {}\n\n",
            day.day,
            Message::DailyNote.text(language),
            day.daily_note
        );
        for meal in &day.meals {
            let _ = writeln!(doc, "### {}", meal.name);
            for item in &meal.items {
                let _ = writeln!(doc, "- {item}");
            }
            doc.push('\n');
        }
        doc.push_str("---\n\n");
    }

    let _ = write!(doc, "\n\n_{}_", Message::ExportDisclaimer.text(language));
    doc
}

/// Render a diet plan in `format`
///
/// # Errors
///
/// Returns a serialization error if JSON encoding fails
pub fn export_diet_plan(
    plan: &DietPlan,
    goal: DietGoal,
    preference: DietaryPreference,
    language: Language,
    format: ExportFormat,
) -> AppResult<FormattedOutput> {
    let data = match format {
        ExportFormat::Markdown => diet_plan_markdown(plan, goal, preference, language),
        ExportFormat::Json => serde_json::to_string_pretty(plan)?,
    };
    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
        file_name: format!("{DIET_PLAN_FILE_STEM}.{}", format.extension()),
    })
}
