// ABOUTME: Re-exports command modules for poramorshok-cli
// ABOUTME: One module per feature: tracker, chat, planners, fun fact and language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

pub mod chat;
pub mod fun_fact;
pub mod language;
pub mod planner;
pub mod track;
