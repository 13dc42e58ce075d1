// ABOUTME: Display formatting for raw numeric activity fields: pace and duration
// ABOUTME: Pure functions, truncation semantics pinned by the dashboard's rendering rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! Pace and duration rendering.
//!
//! Both functions truncate rather than round: a pace of 5:59.99 renders as
//! `"5:59"` instead of rolling to the next minute, and partial seconds never
//! appear in duration strings.

/// Format an average speed as a pace in minutes per kilometer, `M:SS`.
///
/// Returns the sentinel `"-"` when the speed is zero, negative, or not
/// finite: pace is undefined for activities without meaningful movement
/// (strength sessions, treadmill records missing speed). Seconds are
/// truncated, never rounded, and never carry into the minute.
///
/// ```
/// use paceline::formatters::format_pace;
///
/// assert_eq!(format_pace(3.2), "5:12");
/// assert_eq!(format_pace(0.0), "-");
/// ```
#[must_use]
pub fn format_pace(speed_mps: f64) -> String {
    if speed_mps <= 0.0 || !speed_mps.is_finite() {
        return "-".to_owned();
    }

    let pace_min_per_km = 1000.0 / speed_mps / 60.0;
    let minutes = pace_min_per_km as u64;
    let seconds = ((pace_min_per_km - minutes as f64) * 60.0) as u64;
    format!("{minutes}:{seconds:02}")
}

/// Format a duration in seconds as `H:MM:SS` with unbounded hours.
///
/// Hours never wrap at a day boundary: 90000 seconds renders as
/// `"25:00:00"`. Fractional seconds are truncated; negative or non-finite
/// input clamps to zero.
///
/// ```
/// use paceline::formatters::format_duration;
///
/// assert_eq!(format_duration(3661.0), "1:01:01");
/// assert_eq!(format_duration(90000.0), "25:00:00");
/// ```
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    let total_seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours}:{minutes:02}:{secs:02}")
}
