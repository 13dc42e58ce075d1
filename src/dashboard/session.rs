// ABOUTME: Session orchestration, authenticate once then serve render passes
// ABOUTME: Table load is memoized per session; track fetches never are
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

use std::fmt;

use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::dashboard::filter::FilterCriteria;
use crate::dashboard::report::{self, Summary, WeeklyDistance};
use crate::dashboard::table::{ActivityRow, ActivityTable};
use crate::errors::{AuthError, DetailFetchError, LoadError};
use crate::providers::core::ActivitySource;
use crate::track;

/// Everything one render pass hands the presenter.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    /// Filtered activities in listing order, formatted for display
    pub rows: Vec<ActivityRow>,
    /// Headline totals over the filtered activities
    pub summary: Summary,
    /// Monday-keyed weekly distance buckets, earliest first
    pub weekly: Vec<WeeklyDistance>,
}

/// One authenticated dashboard session.
///
/// The session owns its source and serves strictly sequential interactions:
/// the presenter calls [`view`](Self::view) on every filter change and
/// [`track`](Self::track) when a row is selected for mapping. The activity
/// table is fetched once per session and memoized on success only, so a
/// failed load is retried by whatever user action comes next.
pub struct DashboardSession<S> {
    source: S,
    max_activities: usize,
    table: OnceCell<ActivityTable>,
}

// Sources hold credential material; Debug reports the session shape and
// never descends into the source itself.
impl<S> fmt::Debug for DashboardSession<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DashboardSession")
            .field("max_activities", &self.max_activities)
            .field("table_loaded", &self.table.initialized())
            .finish_non_exhaustive()
    }
}

impl<S: ActivitySource> DashboardSession<S> {
    /// Authenticate the source and open a session.
    ///
    /// Credentials come out of the environment-backed configuration; a
    /// missing or rejected token means no session exists at all and the
    /// caller shows a sign-in failure.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when no token is configured or the source
    /// rejects it.
    pub async fn connect(source: S, config: &DashboardConfig) -> Result<Self, AuthError> {
        let credentials = config.credentials()?;
        source.authenticate(&credentials).await?;

        info!(source = source.name(), "dashboard session connected");

        Ok(Self {
            source,
            max_activities: config.max_activities,
            table: OnceCell::new(),
        })
    }

    /// The session's activity table, loading it on first use.
    ///
    /// Repeated filter changes hit the memoized table and never refetch.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the listing call or any record fails;
    /// there is no partial table.
    pub async fn activities(&self) -> Result<&ActivityTable, LoadError> {
        self.table
            .get_or_try_init(|| ActivityTable::load(&self.source, self.max_activities))
            .await
    }

    /// One render pass: filter the table, then summarize and bucket.
    ///
    /// Returns `Ok(None)` when the criteria match nothing; the presenter
    /// shows its empty state and skips aggregates and chart entirely.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the table cannot be loaded.
    pub async fn view(&self, criteria: &FilterCriteria) -> Result<Option<DashboardView>, LoadError> {
        let table = self.activities().await?;
        let filtered = criteria.apply(table.activities());
        if filtered.is_empty() {
            debug!(
                sport_group = %criteria.sport_group,
                "no activities match the filter"
            );
            return Ok(None);
        }

        let summary = report::summarize(&filtered, criteria);
        let weekly = report::weekly_distances(&filtered);
        let rows = filtered
            .iter()
            .map(|activity| ActivityRow::from_activity(activity))
            .collect();

        Ok(Some(DashboardView {
            rows,
            summary,
            weekly,
        }))
    }

    /// GPS track for one activity, fetched fresh on every call.
    ///
    /// Detail payloads are never memoized. A payload with no usable track
    /// degrades to an empty vector; only a failed fetch is an error, and
    /// that error leaves the rest of the dashboard fully functional.
    ///
    /// # Errors
    ///
    /// Returns [`DetailFetchError`] when the detail call fails.
    pub async fn track(&self, activity_id: &str) -> Result<Vec<(f64, f64)>, DetailFetchError> {
        let detail = self
            .source
            .get_activity_detail(activity_id)
            .await
            .map_err(|source| DetailFetchError::Source {
                id: activity_id.to_owned(),
                source,
            })?;

        let points = track::extract_track(&detail);
        if points.is_empty() {
            debug!(activity_id, "no usable track in detail payload");
        }
        Ok(points)
    }
}
