// ABOUTME: Environment configuration management for the dashboard core
// ABOUTME: Reads Garmin endpoint, credential, fetch-limit, and HTTP timeout settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! Environment-based configuration loading.

use std::env;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AuthError;
use crate::providers::core::Credentials;

/// Garmin Connect API base used when `GARMIN_API_BASE` is not set
const DEFAULT_GARMIN_API_BASE: &str = "https://connectapi.garmin.com";

/// Listing fetch cap used when `PACELINE_MAX_ACTIVITIES` is not set
const DEFAULT_MAX_ACTIVITIES: &str = "1000";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Errors and warnings
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose diagnostics
    Debug,
    /// Everything, including per-request noise
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "info" => Self::Info,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info, // Default fallback
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Garmin Connect endpoint and credential configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarminApiConfig {
    /// Base URL for Garmin Connect API calls
    pub base_url: String,
    /// Bearer token from the environment, if present.
    ///
    /// Never serialized: the token must not leak into logs or dumps of the
    /// configuration.
    #[serde(skip_serializing, default)]
    pub access_token: Option<String>,
}

/// HTTP client tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Overall request timeout in seconds
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}

/// Top-level configuration for a dashboard session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Garmin endpoint and credential material
    pub garmin: GarminApiConfig,
    /// Upper bound on records fetched into the activity table
    pub max_activities: usize,
    /// HTTP client tuning
    pub http: HttpConfig,
    /// Log level for the embedding application
    pub log_level: LogLevel,
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first when one exists, so local development
    /// does not need exported variables. Recognized variables:
    ///
    /// - `GARMIN_API_BASE` (default `https://connectapi.garmin.com`)
    /// - `GARMIN_ACCESS_TOKEN` (no default; required to authenticate)
    /// - `PACELINE_MAX_ACTIVITIES` (default 1000)
    /// - `PACELINE_HTTP_TIMEOUT_SECS` / `PACELINE_HTTP_CONNECT_TIMEOUT_SECS`
    ///   (defaults 30 / 10)
    /// - `PACELINE_LOG_LEVEL` (default `info`)
    ///
    /// # Errors
    ///
    /// Returns an error when a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            debug!("no .env file loaded: {e}");
        }

        let config = Self {
            garmin: GarminApiConfig {
                base_url: env_var_or("GARMIN_API_BASE", DEFAULT_GARMIN_API_BASE),
                access_token: env::var("GARMIN_ACCESS_TOKEN").ok(),
            },
            max_activities: env_var_or("PACELINE_MAX_ACTIVITIES", DEFAULT_MAX_ACTIVITIES)
                .parse()
                .context("Invalid PACELINE_MAX_ACTIVITIES value")?,
            http: HttpConfig {
                timeout_secs: env_var_or("PACELINE_HTTP_TIMEOUT_SECS", "30")
                    .parse()
                    .context("Invalid PACELINE_HTTP_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or("PACELINE_HTTP_CONNECT_TIMEOUT_SECS", "10")
                    .parse()
                    .context("Invalid PACELINE_HTTP_CONNECT_TIMEOUT_SECS value")?,
            },
            log_level: LogLevel::from_str_or_default(&env_var_or("PACELINE_LOG_LEVEL", "info")),
        };

        info!(
            base_url = %config.garmin.base_url,
            max_activities = config.max_activities,
            "dashboard configuration loaded"
        );

        Ok(config)
    }

    /// Credential material for `ActivitySource::authenticate`.
    ///
    /// Tokens only ever enter through the environment; there is no code path
    /// that embeds one.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingCredentials`] when `GARMIN_ACCESS_TOKEN`
    /// was not set.
    pub fn credentials(&self) -> Result<Credentials, AuthError> {
        self.garmin
            .access_token
            .as_ref()
            .map(|token| Credentials {
                access_token: token.clone(),
            })
            .ok_or(AuthError::MissingCredentials {
                key: "GARMIN_ACCESS_TOKEN",
            })
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            garmin: GarminApiConfig {
                base_url: DEFAULT_GARMIN_API_BASE.to_owned(),
                access_token: None,
            },
            max_activities: 1000,
            http: HttpConfig::default(),
            log_level: LogLevel::Info,
        }
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
