// ABOUTME: Health tracker commands for poramorshok-cli
// ABOUTME: Adds entries, shows the tracker view, clears history and saves the profile age
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use anyhow::Result;
use poramorshok::{
    context::AppContext,
    controllers::{AdviceOutcome, NewEntry},
    errors::ErrorCode,
};
use tracing::info;

use crate::helpers::display;

/// Store one measurement and print the entry with its advice
pub async fn add(context: &AppContext, form: NewEntry) -> Result<()> {
    let language = context.language().current();
    let added = context.tracker().add_entry(form).await?;
    display::display_entry_added(&added, language);
    Ok(())
}

/// Print the tracker view, fetching advice when none is cached
pub async fn show(context: &AppContext, refresh: bool) -> Result<()> {
    let tracker = context.tracker();
    let mut view = tracker.view()?;

    if !view.history.is_empty() && (refresh || view.advice.is_none()) {
        let outcome = if refresh {
            tracker.refresh_advice().await
        } else {
            tracker.ensure_advice().await
        };
        match outcome {
            Ok(AdviceOutcome::Cached { advice } | AdviceOutcome::Fetched { advice }) => {
                view.advice = Some(advice);
            }
            Ok(AdviceOutcome::Failed { message }) => println!("{message}"),
            Ok(AdviceOutcome::Superseded) => {}
            Err(e) if e.code == ErrorCode::PreconditionFailed => println!("{}", e.message),
            Err(e) => return Err(e.into()),
        }
    }

    display::display_tracker(&view);
    Ok(())
}

/// Delete history and cached advice
pub fn clear(context: &AppContext) -> Result<()> {
    context.tracker().clear()?;
    info!("Tracker history cleared");
    println!("Health history cleared.");
    Ok(())
}

/// Save the profile age text
pub fn set_age(context: &AppContext, age: &str) -> Result<()> {
    context.tracker().set_age(age)?;
    if age.trim().is_empty() {
        println!("Profile age cleared.");
    } else {
        println!("Profile age saved: {}", age.trim());
    }
    Ok(())
}
