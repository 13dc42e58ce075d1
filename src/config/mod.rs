// ABOUTME: Configuration module for environment-driven dashboard settings
// ABOUTME: Re-exports DashboardConfig and the supporting typed config pieces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! Configuration for a dashboard session.
//!
//! Everything is environment-driven; there is no config file format. See
//! [`environment::DashboardConfig::from_env`] for the recognized variables.
//! Credential material in particular only ever enters through the
//! environment, never through source code or checked-in files.

/// Environment-based configuration loading
pub mod environment;

pub use environment::{DashboardConfig, GarminApiConfig, HttpConfig, LogLevel};
