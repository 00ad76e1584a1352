// ABOUTME: Language commands for poramorshok-cli
// ABOUTME: Shows, saves or toggles the language used for output and AI requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use anyhow::Result;
use poramorshok::{constants::storage_keys, context::AppContext, language::Language};

/// Print the active language
pub fn show(context: &AppContext) {
    let language = context.language().current();
    println!("{language} ({})", language.instruction_name());
}

/// Save `language` for later invocations
pub fn set(context: &AppContext, language: Language) -> Result<()> {
    context.language().set(language);
    context.storage().set_json(storage_keys::LANGUAGE, &language)?;
    show(context);
    Ok(())
}

/// Switch to the other language and save it
pub fn toggle(context: &AppContext) -> Result<()> {
    let language = context.language().toggle();
    context.storage().set_json(storage_keys::LANGUAGE, &language)?;
    show(context);
    Ok(())
}
