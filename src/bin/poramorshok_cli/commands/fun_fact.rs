// ABOUTME: Fun fact command for poramorshok-cli
// ABOUTME: Prints one short health fact; falls back to a built-in fact on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

use poramorshok::context::AppContext;

/// Print a fun fact
pub async fn show(context: &AppContext) {
    println!("{}", context.fun_fact().fetch().await);
}
