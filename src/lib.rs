// ABOUTME: Main library entry point for the Paceline dashboard core
// ABOUTME: Session flow, normalization, filtering, and aggregation for Garmin activity data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! # Paceline
//!
//! The data core of a personal fitness dashboard for a single Garmin
//! Connect account: pull the activity history once per session, normalize
//! it, and answer every filter change with totals, weekly distance buckets,
//! and display-ready rows. Rendering is somebody else's job; this crate
//! returns plain data.
//!
//! ## Features
//!
//! - **One snapshot per session**: a single listing call, memoized, so
//!   filter changes never refetch
//! - **Sport grouping**: raw Garmin type keys collapse into seven stable
//!   groups for filtering
//! - **Aggregates**: headline totals plus Monday-keyed weekly distances
//! - **Track on demand**: per-activity GPS polylines, fetched fresh and
//!   degraded to empty when absent
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use paceline::config::DashboardConfig;
//! use paceline::dashboard::{DashboardSession, FilterCriteria};
//! use paceline::models::SportGroup;
//! use paceline::providers::GarminConnectSource;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     paceline::logging::init_from_env()?;
//!     let config = DashboardConfig::from_env()?;
//!
//!     let source = GarminConnectSource::new(&config.garmin, &config.http);
//!     let session = DashboardSession::connect(source, &config).await?;
//!
//!     let criteria = FilterCriteria {
//!         sport_group: SportGroup::Running,
//!         start_date: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
//!         end_date: NaiveDate::from_ymd_opt(2024, 5, 31).expect("valid date"),
//!     };
//!
//!     match session.view(&criteria).await? {
//!         Some(view) => println!(
//!             "{:.1} km across {} activities",
//!             view.summary.total_distance_km,
//!             view.rows.len()
//!         ),
//!         None => println!("no matching activities"),
//!     }
//!
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// Everything here is consumed by integration tests and by whatever
// presenter embeds the dashboard core.

/// Environment-backed configuration
pub mod config;

/// Session flow, table loading, filtering, and aggregation
pub mod dashboard;

/// Error taxonomy for authentication, loading, and detail fetches
pub mod errors;

/// Display formatting for pace and duration
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Activity domain model and sport grouping
pub mod models;

/// Activity sources, the Garmin Connect client and the trait behind it
pub mod providers;

/// GPS track extraction from raw detail payloads
pub mod track;
