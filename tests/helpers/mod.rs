// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the synthetic activity source and canned record builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod synthetic_source;
