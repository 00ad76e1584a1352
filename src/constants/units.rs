// ABOUTME: Unit conversion constants for body height measurements
// ABOUTME: Named factors used by the centimeter and feet/inch converters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Poramorshok Health

/// Centimeters per inch (exact by definition)
pub const CM_PER_INCH: f64 = 2.54;

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;
