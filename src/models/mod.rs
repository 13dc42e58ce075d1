// ABOUTME: Core data models for the dashboard: activities and sport groups
// ABOUTME: Re-exports Activity, ActivityBuilder, and SportGroup for the rest of the crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! # Data Models
//!
//! The dashboard works with exactly one row type, [`Activity`], plus the
//! [`SportGroup`] enumeration it is classified into. Models are plain data:
//! all normalization happens in
//! [`ActivityTable`](crate::dashboard::table::ActivityTable) on the way in,
//! and everything here serializes to JSON so a presenter can lift rows
//! across any boundary it likes.

// Domain modules
mod activity;
mod sport;

pub use activity::{Activity, ActivityBuilder};
pub use sport::SportGroup;
