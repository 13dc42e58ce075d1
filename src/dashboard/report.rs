// ABOUTME: Aggregates over a filtered view, headline totals and weekly distance buckets
// ABOUTME: Weeks are Monday-keyed calendar weeks from the local start time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::dashboard::filter::FilterCriteria;
use crate::models::Activity;

/// Aggregate totals for one filtered view.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Summary {
    /// Total distance in kilometers
    pub total_distance_km: f64,
    /// Total moving time in hours
    pub total_duration_hours: f64,
    /// Total calories, missing values counted as zero
    pub total_calories: f64,
    /// Days in the selected date range, both bounds inclusive
    pub day_count: i64,
}

/// Distance covered in one calendar week.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WeeklyDistance {
    /// Monday of the week
    pub week_start: NaiveDate,
    /// Kilometers covered in that week
    pub distance_km: f64,
}

/// Sum a filtered view into the dashboard headline numbers.
///
/// `day_count` comes from the criteria bounds, not from the data: a month
/// with one run still reports the full month of days.
#[must_use]
pub fn summarize(filtered: &[&Activity], criteria: &FilterCriteria) -> Summary {
    let total_distance_km = filtered
        .iter()
        .map(|activity| activity.distance_meters())
        .sum::<f64>()
        / 1000.0;
    let total_duration_hours = filtered
        .iter()
        .map(|activity| activity.duration_seconds())
        .sum::<f64>()
        / 3600.0;
    let total_calories = filtered
        .iter()
        .filter_map(|activity| activity.calories())
        .sum::<f64>();

    Summary {
        total_distance_km,
        total_duration_hours,
        total_calories,
        day_count: criteria.day_count(),
    }
}

/// Bucket a filtered view into calendar weeks and sum distance per week.
///
/// Each activity lands in the week of its local start date, keyed by that
/// week's Monday. Buckets come back in chronological order; weeks with no
/// activity simply do not appear, the chart draws only the buckets that
/// exist.
#[must_use]
pub fn weekly_distances(filtered: &[&Activity]) -> Vec<WeeklyDistance> {
    let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();

    for activity in filtered {
        let date = activity.start_time().date();
        let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
        *buckets.entry(monday).or_insert(0.0) += activity.distance_meters();
    }

    buckets
        .into_iter()
        .map(|(week_start, meters)| WeeklyDistance {
            week_start,
            distance_km: meters / 1000.0,
        })
        .collect()
}
