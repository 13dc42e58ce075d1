// ABOUTME: Activity source integrations for remote fitness accounts
// ABOUTME: Defines the source contract and the Garmin Connect implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! Activity sources.
//!
//! The dashboard talks to one remote account through the
//! [`ActivitySource`] trait; [`GarminConnectSource`] is the production
//! implementation. Everything above this module works on raw JSON records
//! and never sees HTTP.

/// Source contract and credential type
pub mod core;
/// Garmin Connect REST implementation
pub mod garmin;

pub use self::core::{ActivitySource, Credentials};
pub use self::garmin::GarminConnectSource;
