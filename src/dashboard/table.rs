// ABOUTME: Session activity table, one listing call normalized all-or-nothing
// ABOUTME: Raw Garmin records become Activity values plus display-ready rows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::LoadError;
use crate::formatters::{format_duration, format_pace};
use crate::models::{Activity, ActivityBuilder, SportGroup};
use crate::providers::core::ActivitySource;

/// Timestamp layout Garmin uses for `startTimeLocal`
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Listing record fields the table consumes.
///
/// Everything else in the payload is ignored; absence of a required field
/// fails the whole load.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActivity {
    activity_id: u64,
    activity_name: String,
    start_time_local: String,
    activity_type: RawActivityType,
    distance: f64,
    duration: f64,
    #[serde(default)]
    calories: Option<f64>,
    #[serde(default)]
    average_speed: Option<f64>,
    #[serde(default, rename = "averageHR")]
    average_hr: Option<f64>,
    #[serde(default)]
    average_cadence: Option<f64>,
}

/// Nested type descriptor; only the key matters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActivityType {
    type_key: String,
}

/// Normalize one listing record into an [`Activity`].
fn normalize_record(index: usize, record: Value) -> Result<Activity, LoadError> {
    let raw: RawActivity =
        serde_json::from_value(record).map_err(|source| LoadError::Record { index, source })?;

    let id = raw.activity_id.to_string();
    let start_time = NaiveDateTime::parse_from_str(&raw.start_time_local, START_TIME_FORMAT)
        .map_err(|source| LoadError::StartTime {
            id: id.clone(),
            value: raw.start_time_local.clone(),
            source,
        })?;

    Ok(ActivityBuilder::new(
        id,
        raw.activity_name,
        raw.activity_type.type_key,
        start_time,
        raw.distance,
        raw.duration,
    )
    .calories_opt(raw.calories)
    .average_speed_mps_opt(raw.average_speed)
    .average_heart_rate_opt(raw.average_hr)
    .average_cadence_opt(raw.average_cadence)
    .build())
}

/// The session's activity history, most recent first.
///
/// Built from a single listing call and normalized as a unit: one bad record
/// fails the whole load and no partial table exists. Source order is kept,
/// so index 0 is the most recent activity.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityTable {
    activities: Vec<Activity>,
}

impl ActivityTable {
    /// Fetch and normalize the session snapshot.
    ///
    /// Issues exactly one listing call with offset 0 and the given cap.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the listing call fails, a record is
    /// missing a required field, or a start timestamp does not parse.
    pub async fn load<S>(source: &S, limit: usize) -> Result<Self, LoadError>
    where
        S: ActivitySource + ?Sized,
    {
        let records = source.list_activities(0, limit).await?;
        info!(count = records.len(), "activity listing fetched");

        let mut activities = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            activities.push(normalize_record(index, record)?);
        }

        Ok(Self { activities })
    }

    /// All activities in listing order.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Number of activities in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// True when the account reported no activities at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Display-ready projection of the whole table.
    #[must_use]
    pub fn rows(&self) -> Vec<ActivityRow> {
        self.activities.iter().map(ActivityRow::from_activity).collect()
    }
}

/// One activity rendered for the table and the track selector.
///
/// Distance is rounded to two decimals; duration and pace are already
/// formatted strings so the presenter can show them verbatim.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActivityRow {
    /// Identifier echoed back when the user selects the row for mapping
    pub id: String,
    /// Local start timestamp
    pub start_time: NaiveDateTime,
    /// Activity name
    pub name: String,
    /// Sport group the activity was classified into
    pub sport_group: SportGroup,
    /// Distance in kilometers, two decimals
    pub distance_km: f64,
    /// Duration as `H:MM:SS`
    pub duration: String,
    /// Pace as `M:SS` per kilometer, `-` when speed is unusable
    pub pace: String,
    /// Average heart rate in BPM, if reported
    pub average_heart_rate: Option<f64>,
    /// Average cadence, if reported
    pub average_cadence: Option<f64>,
    /// Calories burned, if reported
    pub calories: Option<f64>,
}

impl ActivityRow {
    /// Project one activity into its display row.
    #[must_use]
    pub fn from_activity(activity: &Activity) -> Self {
        Self {
            id: activity.id().to_owned(),
            start_time: activity.start_time(),
            name: activity.name().to_owned(),
            sport_group: activity.sport_group(),
            distance_km: round_two(activity.distance_meters() / 1000.0),
            duration: format_duration(activity.duration_seconds()),
            pace: activity
                .average_speed_mps()
                .map_or_else(|| "-".to_owned(), format_pace),
            average_heart_rate: activity.average_heart_rate(),
            average_cadence: activity.average_cadence(),
            calories: activity.calories(),
        }
    }

    /// Label shown in the track selector, minute precision is enough there.
    #[must_use]
    pub fn selector_label(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%Y-%m-%d %H:%M"),
            self.name
        )
    }
}

/// Round to two decimal places for display.
fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
