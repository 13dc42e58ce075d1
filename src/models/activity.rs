// ABOUTME: Activity domain model with builder, the one row type the dashboard works with
// ABOUTME: sport_group is derived from type_key at construction and can never be set independently
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

use chrono::NaiveDateTime;
use serde::Serialize;

use super::sport::SportGroup;

/// One activity as the dashboard sees it.
///
/// Produced by normalizing a raw Garmin listing record: the nested type
/// descriptor is flattened into `type_key` plus the derived `sport_group`,
/// and distance/duration are coerced to floats. `start_time` is the local
/// wall-clock timestamp exactly as reported, with no timezone conversion;
/// both date filtering and weekly bucketing read this field.
///
/// The struct is deliberately not `Deserialize`: the only way to build one
/// is through [`ActivityBuilder`], which keeps `sport_group` consistent with
/// `type_key`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Activity {
    /// Provider-assigned identifier, stable across sessions
    id: String,
    /// Free-text label
    name: String,
    /// Local start timestamp (date + time)
    start_time: NaiveDateTime,
    /// Raw sport type key as reported by the source
    type_key: String,
    /// Sport group derived from `type_key`
    sport_group: SportGroup,
    /// Distance covered in meters
    distance_meters: f64,
    /// Elapsed duration in seconds
    duration_seconds: f64,
    /// Calories burned, if reported
    #[serde(skip_serializing_if = "Option::is_none")]
    calories: Option<f64>,
    /// Average speed in meters per second
    #[serde(skip_serializing_if = "Option::is_none")]
    average_speed_mps: Option<f64>,
    /// Average heart rate in BPM
    #[serde(skip_serializing_if = "Option::is_none")]
    average_heart_rate: Option<f64>,
    /// Average cadence in steps or revolutions per minute
    #[serde(skip_serializing_if = "Option::is_none")]
    average_cadence: Option<f64>,
}

impl Activity {
    /// Returns the provider-assigned identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the free-text activity name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the local start timestamp
    #[must_use]
    pub const fn start_time(&self) -> NaiveDateTime {
        self.start_time
    }

    /// Returns the raw sport type key as reported by the source
    #[must_use]
    pub fn type_key(&self) -> &str {
        &self.type_key
    }

    /// Returns the sport group derived from the type key
    #[must_use]
    pub const fn sport_group(&self) -> SportGroup {
        self.sport_group
    }

    /// Returns the distance covered in meters
    #[must_use]
    pub const fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    /// Returns the elapsed duration in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    /// Returns the calories burned, if reported
    #[must_use]
    pub const fn calories(&self) -> Option<f64> {
        self.calories
    }

    /// Returns the average speed in meters per second, if reported
    #[must_use]
    pub const fn average_speed_mps(&self) -> Option<f64> {
        self.average_speed_mps
    }

    /// Returns the average heart rate in BPM, if reported
    #[must_use]
    pub const fn average_heart_rate(&self) -> Option<f64> {
        self.average_heart_rate
    }

    /// Returns the average cadence, if reported
    #[must_use]
    pub const fn average_cadence(&self) -> Option<f64> {
        self.average_cadence
    }
}

/// Builder for [`Activity`] with required fields up front and optional
/// metrics chained.
#[derive(Debug)]
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    /// Creates a builder from the fields every record must carry.
    ///
    /// The sport group is derived from `type_key` here; there is no setter
    /// for it.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        type_key: impl Into<String>,
        start_time: NaiveDateTime,
        distance_meters: f64,
        duration_seconds: f64,
    ) -> Self {
        let type_key = type_key.into();
        let sport_group = SportGroup::classify(&type_key);
        Self {
            activity: Activity {
                id: id.into(),
                name: name.into(),
                start_time,
                type_key,
                sport_group,
                distance_meters,
                duration_seconds,
                calories: None,
                average_speed_mps: None,
                average_heart_rate: None,
                average_cadence: None,
            },
        }
    }

    /// Sets the calories burned
    #[must_use]
    pub const fn calories(mut self, value: f64) -> Self {
        self.activity.calories = Some(value);
        self
    }

    /// Sets the calories burned (optional)
    #[must_use]
    pub const fn calories_opt(mut self, value: Option<f64>) -> Self {
        self.activity.calories = value;
        self
    }

    /// Sets the average speed in meters per second
    #[must_use]
    pub const fn average_speed_mps(mut self, value: f64) -> Self {
        self.activity.average_speed_mps = Some(value);
        self
    }

    /// Sets the average speed in meters per second (optional)
    #[must_use]
    pub const fn average_speed_mps_opt(mut self, value: Option<f64>) -> Self {
        self.activity.average_speed_mps = value;
        self
    }

    /// Sets the average heart rate in BPM
    #[must_use]
    pub const fn average_heart_rate(mut self, value: f64) -> Self {
        self.activity.average_heart_rate = Some(value);
        self
    }

    /// Sets the average heart rate in BPM (optional)
    #[must_use]
    pub const fn average_heart_rate_opt(mut self, value: Option<f64>) -> Self {
        self.activity.average_heart_rate = value;
        self
    }

    /// Sets the average cadence
    #[must_use]
    pub const fn average_cadence(mut self, value: f64) -> Self {
        self.activity.average_cadence = Some(value);
        self
    }

    /// Sets the average cadence (optional)
    #[must_use]
    pub const fn average_cadence_opt(mut self, value: Option<f64>) -> Self {
        self.activity.average_cadence = value;
        self
    }

    /// Finalizes the builder
    #[must_use]
    pub fn build(self) -> Activity {
        self.activity
    }
}
