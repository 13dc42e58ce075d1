// ABOUTME: Integration tests for pace and duration formatting
// ABOUTME: Pins truncation behavior, zero padding, and the unusable-speed dash
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use paceline::formatters::{format_duration, format_pace};

#[test]
fn test_pace_renders_minutes_and_padded_seconds() {
    // 3.2 m/s is 5.208... min/km
    assert_eq!(format_pace(3.2), "5:12");
    // 2.5 m/s is exactly 6:40 min/km
    assert_eq!(format_pace(2.5), "6:40");
    // 2.0 m/s is 8:20 min/km
    assert_eq!(format_pace(2.0), "8:20");
}

#[test]
fn test_pace_seconds_truncate_instead_of_rounding_up() {
    // 359.99 s/km is a hair under 6:00 and must stay 5:59, never 6:00.
    let speed = 1000.0 / 359.99;
    assert_eq!(format_pace(speed), "5:59");
}

#[test]
fn test_pace_on_an_exact_minute_boundary_keeps_the_full_minute() {
    // 360 s/km is exactly 6:00; truncation must not shave it to 5:59.
    assert_eq!(format_pace(1000.0 / 360.0), "6:00");
    // 240 s/km computes as 3.999... minutes in floats and truncates down.
    assert_eq!(format_pace(1000.0 / 240.0), "3:59");
}

#[test]
fn test_pace_pads_single_digit_seconds() {
    // 302.5 s/km truncates to 5:02
    let speed = 1000.0 / 302.5;
    assert_eq!(format_pace(speed), "5:02");
}

#[test]
fn test_unusable_speed_renders_a_dash() {
    assert_eq!(format_pace(0.0), "-");
    assert_eq!(format_pace(-1.5), "-");
    assert_eq!(format_pace(f64::NAN), "-");
    assert_eq!(format_pace(f64::INFINITY), "-");
}

#[test]
fn test_duration_renders_hours_minutes_seconds() {
    assert_eq!(format_duration(3661.0), "1:01:01");
    assert_eq!(format_duration(59.0), "0:00:59");
    assert_eq!(format_duration(600.0), "0:10:00");
}

#[test]
fn test_duration_hours_run_past_twenty_four() {
    // Multi-day totals keep accumulating hours instead of wrapping.
    assert_eq!(format_duration(90000.0), "25:00:00");
}

#[test]
fn test_duration_truncates_fractional_seconds() {
    assert_eq!(format_duration(3661.9), "1:01:01");
    assert_eq!(format_duration(0.0), "0:00:00");
    assert_eq!(format_duration(-5.0), "0:00:00");
}
