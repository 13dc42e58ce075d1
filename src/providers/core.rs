// ABOUTME: Core source trait and credential type for pulling activity history
// ABOUTME: Sources handle transport and authentication only; normalization stays in the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! The boundary between the dashboard and the remote account.
//!
//! [`ActivitySource`] is the whole contract: authenticate once, list raw
//! records, fetch one raw detail payload. The listing and detail calls hand
//! back untyped JSON on purpose; every assumption about payload shape lives
//! in the dashboard layer where it can fail with a typed error, and a source
//! implementation only concerns itself with transport.
//!
//! ## Example: an in-memory source
//!
//! ```
//! use async_trait::async_trait;
//! use paceline::errors::{AuthError, SourceError};
//! use paceline::providers::core::{ActivitySource, Credentials};
//! use serde_json::Value;
//!
//! struct CannedSource {
//!     records: Vec<Value>,
//! }
//!
//! #[async_trait]
//! impl ActivitySource for CannedSource {
//!     fn name(&self) -> &'static str {
//!         "canned"
//!     }
//!
//!     async fn authenticate(&self, _credentials: &Credentials) -> Result<(), AuthError> {
//!         Ok(())
//!     }
//!
//!     async fn list_activities(
//!         &self,
//!         offset: usize,
//!         limit: usize,
//!     ) -> Result<Vec<Value>, SourceError> {
//!         Ok(self.records.iter().skip(offset).take(limit).cloned().collect())
//!     }
//!
//!     async fn get_activity_detail(&self, id: &str) -> Result<Value, SourceError> {
//!         Err(SourceError::Api {
//!             provider: "canned",
//!             endpoint: format!("detail/{id}"),
//!             status: 404,
//!         })
//!     }
//! }
//! ```

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::{AuthError, SourceError};

/// Credential material presented to a source.
///
/// Only ever built from environment configuration
/// (see [`DashboardConfig::credentials`](crate::config::DashboardConfig::credentials));
/// nothing in this crate embeds a token.
#[derive(Clone)]
pub struct Credentials {
    /// Bearer token presented on every API call
    pub access_token: String,
}

// Keeps tokens out of logs; Debug output is the redacted form only.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Remote account the dashboard pulls activity history from.
///
/// One implementation talks to Garmin Connect
/// ([`GarminConnectSource`](crate::providers::garmin::GarminConnectSource));
/// tests substitute an in-memory source. Every method is a single attempt:
/// sources never retry, and a failure is surfaced once and retried only by a
/// fresh user action.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Short provider name used in error and log messages
    fn name(&self) -> &'static str;

    /// Establish a session with the supplied credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] when the credentials are rejected or the
    /// service cannot be reached. No session state survives a failed
    /// attempt.
    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError>;

    /// List raw activity records, most recent first.
    ///
    /// `offset` and `limit` page through the account history; the dashboard
    /// issues one call with offset 0 and its configured cap.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the call fails. The caller maps this to
    /// a render-fatal [`LoadError`](crate::errors::LoadError).
    async fn list_activities(&self, offset: usize, limit: usize)
        -> Result<Vec<Value>, SourceError>;

    /// Fetch the raw detail payload for one activity.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the call fails. The caller maps this to
    /// a recoverable [`DetailFetchError`](crate::errors::DetailFetchError).
    async fn get_activity_detail(&self, id: &str) -> Result<Value, SourceError>;
}
