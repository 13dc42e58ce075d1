// ABOUTME: Logging configuration and structured logging setup for the dashboard core
// ABOUTME: Builds an EnvFilter with HTTP-stack noise reduction and installs a fmt subscriber
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! Structured logging setup.
//!
//! The crate itself only emits `tracing` events; installing a subscriber is
//! the embedding application's move. A presenter that wants the house
//! defaults calls [`init_from_env`] once at startup and gets an env-filtered
//! fmt subscriber with the HTTP client noise turned down.

use std::env;
use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include span open/close events
    pub include_spans: bool,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for production logging
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for space-constrained environments
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_spans: false,
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("PACELINE_LOG_LEVEL").unwrap_or_else(|_| "info".into());

        let format = match env::var("PACELINE_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            include_location: env::var("PACELINE_LOG_LOCATION").is_ok(),
            include_spans: env::var("PACELINE_LOG_SPANS").is_ok(),
        }
    }

    /// Initialize the global tracing subscriber.
    ///
    /// `RUST_LOG` takes precedence over the configured level when set, and
    /// the chatty HTTP internals are capped at `warn` either way so a debug
    /// session is not buried in hyper traffic.
    ///
    /// # Errors
    ///
    /// Returns an error when a global subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let env_filter = env::var("RUST_LOG")
            .map_or_else(|_| EnvFilter::new(&self.level), EnvFilter::new)
            .add_directive(
                "hyper=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            .add_directive(
                "reqwest=warn"
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            )
            // Keep our own events at the configured level
            .add_directive(
                format!("paceline={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::INFO.into()),
            );

        let registry = tracing_subscriber::registry().with(env_filter);

        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events)
                    .json();

                registry
                    .with(json_layer)
                    .try_init()
                    .context("Failed to initialize JSON tracing subscriber")?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events);

                registry
                    .with(pretty_layer)
                    .try_init()
                    .context("Failed to initialize tracing subscriber")?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_target(true)
                    .with_writer(io::stdout)
                    .with_span_events(span_events)
                    .compact();

                registry
                    .with(compact_layer)
                    .try_init()
                    .context("Failed to initialize compact tracing subscriber")?;
            }
        }

        Ok(())
    }
}

/// Install the default subscriber configured from the environment.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
