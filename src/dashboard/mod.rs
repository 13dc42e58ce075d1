// ABOUTME: Dashboard core, table loading, filtering, aggregation, session flow
// ABOUTME: Pure data in and out; rendering belongs to whatever presenter sits on top
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! The dashboard itself, minus pixels.
//!
//! A [`DashboardSession`] authenticates once, loads the activity table on
//! first use, and then answers render passes: apply [`FilterCriteria`],
//! summarize, bucket weekly distances, and fetch a GPS track for a selected
//! row. Everything returned here is plain data for a presenter to draw.

/// Filter criteria over the activity table
pub mod filter;
/// Aggregate totals and weekly distance buckets
pub mod report;
/// Session orchestration and the per-render view
pub mod session;
/// Activity table loading and display rows
pub mod table;

pub use filter::FilterCriteria;
pub use report::{summarize, weekly_distances, Summary, WeeklyDistance};
pub use session::{DashboardSession, DashboardView};
pub use table::{ActivityRow, ActivityTable};
