// ABOUTME: Garmin Connect implementation of the ActivitySource trait
// ABOUTME: One pooled HTTP client, bearer-token auth, single-attempt REST calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! Garmin Connect REST source.
//!
//! Talks to the same `connectapi` endpoints the Connect web app uses:
//! `activitylist-service` for the session listing and `activity-service`
//! for per-activity detail (the payload carrying `geoPolylineDTO`).
//! Authentication is validated once against the user profile endpoint so a
//! bad token fails at connect time instead of on the first listing call.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::core::{ActivitySource, Credentials};
use crate::config::{GarminApiConfig, HttpConfig};
use crate::errors::{AuthError, SourceError};

/// Provider name used in errors and logs
const PROVIDER: &str = "garmin";

/// Endpoint probed during authentication; any success means the token works
const PROFILE_ENDPOINT: &str = "userprofile-service/userprofile/profile";

/// [`ActivitySource`] backed by the Garmin Connect REST API.
///
/// Holds one pooled client and the bearer token accepted by
/// [`authenticate`](ActivitySource::authenticate). Calls are never retried
/// here; a failure goes straight back to the caller.
pub struct GarminConnectSource {
    base_url: String,
    credentials: RwLock<Option<Credentials>>,
    client: Client,
}

impl GarminConnectSource {
    /// Create a source for the given endpoint and HTTP tuning.
    #[must_use]
    pub fn new(garmin: &GarminApiConfig, http: &HttpConfig) -> Self {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(http.timeout_secs))
            .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            base_url: garmin.base_url.trim_end_matches('/').to_owned(),
            credentials: RwLock::new(None),
            client,
        }
    }

    /// Bearer token for the current session.
    async fn access_token(&self) -> Result<String, SourceError> {
        let guard = self.credentials.read().await;
        guard
            .as_ref()
            .map(|credentials| credentials.access_token.clone())
            .ok_or(SourceError::NotAuthenticated { provider: PROVIDER })
    }

    /// Issue one authenticated GET and decode the JSON body.
    async fn api_get(&self, endpoint: &str) -> Result<Value, SourceError> {
        let token = self.access_token().await?;
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));

        debug!(endpoint, "garmin api request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|source| SourceError::Network {
                provider: PROVIDER,
                endpoint: endpoint.to_owned(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                endpoint,
                status = status.as_u16(),
                "garmin api request failed"
            );
            return Err(SourceError::Api {
                provider: PROVIDER,
                endpoint: endpoint.to_owned(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|source| SourceError::Decode {
                provider: PROVIDER,
                endpoint: endpoint.to_owned(),
                source,
            })
    }
}

#[async_trait]
impl ActivitySource for GarminConnectSource {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn authenticate(&self, credentials: &Credentials) -> Result<(), AuthError> {
        // Hold the token provisionally, then prove it against the profile
        // endpoint; a rejected token never survives in the session.
        *self.credentials.write().await = Some(credentials.clone());

        match self.api_get(PROFILE_ENDPOINT).await {
            Ok(_) => {
                info!("garmin session established");
                Ok(())
            }
            Err(err) => {
                *self.credentials.write().await = None;
                Err(match err {
                    SourceError::Api { status, .. } => AuthError::Rejected {
                        provider: PROVIDER,
                        status,
                    },
                    SourceError::Network { source, .. } | SourceError::Decode { source, .. } => {
                        AuthError::Network {
                            provider: PROVIDER,
                            source,
                        }
                    }
                    // Unreachable here; the token was just stored above.
                    SourceError::NotAuthenticated { .. } => AuthError::MissingCredentials {
                        key: "GARMIN_ACCESS_TOKEN",
                    },
                })
            }
        }
    }

    async fn list_activities(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Value>, SourceError> {
        // Same listing call the Connect web app makes for the activity page
        let endpoint =
            format!("activitylist-service/activities/search/activities?start={offset}&limit={limit}");
        let body = self.api_get(&endpoint).await?;

        match body {
            Value::Array(records) => Ok(records),
            other => {
                warn!(
                    endpoint,
                    kind = json_kind(&other),
                    "garmin listing body was not an array"
                );
                Err(SourceError::Api {
                    provider: PROVIDER,
                    endpoint,
                    status: 200,
                })
            }
        }
    }

    async fn get_activity_detail(&self, id: &str) -> Result<Value, SourceError> {
        let endpoint = format!("activity-service/activity/{id}/details");
        self.api_get(&endpoint).await
    }
}

/// JSON value kind for log messages.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
