// ABOUTME: Re-exports helper modules for poramorshok-cli
// ABOUTME: Provides terminal display formatting for controller results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

pub mod display;
