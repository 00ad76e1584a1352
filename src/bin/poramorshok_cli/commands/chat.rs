// ABOUTME: Symptom chat commands for poramorshok-cli
// ABOUTME: Sends a symptom description, prints the transcript or clears it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use anyhow::Result;
use poramorshok::{context::AppContext, errors::ErrorCode, models::ChatMessage};

use crate::helpers::display;

/// Send one message and print the reply
pub async fn send(context: &AppContext, message: &str) -> Result<()> {
    let chat = context.chat();
    match chat.send(message).await {
        Ok(reply) => display::display_chat_message(&reply),
        Err(e) if e.code.is_external() => {
            // The failure reply is already part of the transcript
            if let Some(reply) = chat.history()?.last() {
                display::display_chat_message(reply);
            }
            return Err(e.into());
        }
        Err(e) if e.code == ErrorCode::PreconditionFailed => println!("{}", e.message),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Print the whole transcript
pub fn history(context: &AppContext) -> Result<()> {
    let messages: Vec<ChatMessage> = context.chat().history()?;
    if messages.is_empty() {
        println!("No messages yet.");
    }
    for message in &messages {
        display::display_chat_message(message);
    }
    Ok(())
}

/// Delete the transcript
pub fn clear(context: &AppContext) -> Result<()> {
    context.chat().clear()?;
    println!("Chat history cleared.");
    Ok(())
}
