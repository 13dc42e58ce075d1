// ABOUTME: Sport group enumeration and raw Garmin typeKey classification
// ABOUTME: classify is a pure function of the key; unrecognized keys fall through to Other
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of sport groups the dashboard reports on.
///
/// Garmin reports dozens of fine-grained activity type keys; the dashboard
/// folds them into the handful of groups a person actually filters by. The
/// `Other` variant absorbs every key the classification table does not
/// recognize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportGroup {
    /// Outdoor and treadmill running
    Running,
    /// Outdoor and indoor cycling
    Cycling,
    /// Pool, lap, and open-water swimming
    Swimming,
    /// Weight and strength work
    Strength,
    /// Classic and skate nordic skiing
    CrossCountrySkiing,
    /// Hikes and walks of any kind
    HikingWalking,
    /// Anything the classification table does not recognize
    Other,
}

impl SportGroup {
    /// Classify a raw Garmin activity type key into its sport group.
    ///
    /// Pure function of the key: two activities with the same `type_key`
    /// always land in the same group. Matching is exact, so unknown keys and
    /// differently-cased spellings both fall through to [`Self::Other`].
    #[must_use]
    pub fn classify(type_key: &str) -> Self {
        match type_key {
            "running" | "treadmill_running" => Self::Running,
            "cycling" | "indoor_cycling" => Self::Cycling,
            "swimming" | "pool_swimming" | "open_water_swimming" | "lap_swimming" => {
                Self::Swimming
            }
            "strength_training" | "weight_training" => Self::Strength,
            "cross_country_skiing" | "nordic_skiing" => Self::CrossCountrySkiing,
            "hiking" | "walking" | "trail_walking" | "casual_walking" => Self::HikingWalking,
            _ => Self::Other,
        }
    }

    /// Human-facing label for selector widgets and report headings.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
            Self::Swimming => "Swimming",
            Self::Strength => "Strength",
            Self::CrossCountrySkiing => "Cross-country skiing",
            Self::HikingWalking => "Hiking / Walking",
            Self::Other => "Other",
        }
    }

    /// All groups in presentation order, catch-all last.
    ///
    /// Selector widgets iterate this instead of hardcoding their own list so
    /// the filter UI and the classifier can never disagree about the group
    /// set.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Running,
            Self::Cycling,
            Self::Swimming,
            Self::Strength,
            Self::CrossCountrySkiing,
            Self::HikingWalking,
            Self::Other,
        ]
    }
}

impl fmt::Display for SportGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
