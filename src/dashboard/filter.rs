// ABOUTME: Filter criteria applied to the activity table before aggregation
// ABOUTME: Exact sport group match plus an inclusive local-date range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Activity, SportGroup};

/// What the user picked in the filter controls.
///
/// Both date bounds are inclusive and compared against the calendar date of
/// the activity's local start time; the time of day never matters. An
/// activity on `end_date` at 23:59 is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Sport group to keep, matched exactly
    pub sport_group: SportGroup,
    /// First day of the range
    pub start_date: NaiveDate,
    /// Last day of the range
    pub end_date: NaiveDate,
}

impl FilterCriteria {
    /// True when the activity belongs to the selected group and starts
    /// within the date range.
    #[must_use]
    pub fn matches(&self, activity: &Activity) -> bool {
        let date = activity.start_time().date();
        activity.sport_group() == self.sport_group
            && date >= self.start_date
            && date <= self.end_date
    }

    /// Filtered view over the table, input order preserved.
    ///
    /// An empty result is a normal outcome, not an error; the presenter
    /// shows its empty state and skips aggregation.
    #[must_use]
    pub fn apply<'a>(&self, activities: &'a [Activity]) -> Vec<&'a Activity> {
        activities
            .iter()
            .filter(|activity| self.matches(activity))
            .collect()
    }

    /// Days in the inclusive range, so a single-day range counts one.
    #[must_use]
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use chrono::NaiveDate;

    use super::*;
    use crate::models::ActivityBuilder;

    fn run_on(date: NaiveDate) -> Activity {
        ActivityBuilder::new(
            "1",
            "Run",
            "running",
            date.and_hms_opt(23, 59, 0).unwrap(),
            5000.0,
            1500.0,
        )
        .build()
    }

    fn criteria(start: (i32, u32, u32), end: (i32, u32, u32)) -> FilterCriteria {
        FilterCriteria {
            sport_group: SportGroup::Running,
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        }
    }

    #[test]
    fn test_bounds_are_inclusive_regardless_of_time_of_day() {
        let criteria = criteria((2024, 5, 1), (2024, 5, 31));

        assert!(criteria.matches(&run_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())));
        assert!(criteria.matches(&run_on(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap())));
        assert!(!criteria.matches(&run_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())));
    }

    #[test]
    fn test_day_count_counts_both_endpoints() {
        assert_eq!(criteria((2024, 5, 1), (2024, 5, 7)).day_count(), 7);
        assert_eq!(criteria((2024, 5, 1), (2024, 5, 1)).day_count(), 1);
    }
}
