// ABOUTME: Error taxonomy for the dashboard core: authentication, table load, detail fetch
// ABOUTME: Structured thiserror enums so callers can tell fatal failures from recoverable ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! Failure classes and how far each one reaches.
//!
//! [`AuthError`] is fatal to the session, [`LoadError`] is fatal to the
//! current render pass, and [`DetailFetchError`] only withholds the map for
//! one activity. Nothing in this crate retries: every failure is reported
//! once and a new user action is the only way to try again.

use thiserror::Error;

/// Errors raised by an [`ActivitySource`](crate::providers::core::ActivitySource)
/// transport while talking to the remote service.
#[derive(Debug, Error)]
pub enum SourceError {
    /// A data call was issued before `authenticate` succeeded.
    #[error("{provider} has no authenticated session")]
    NotAuthenticated {
        /// Source the call was issued against
        provider: &'static str,
    },

    /// The request never produced an HTTP response.
    #[error("network error calling {provider} endpoint {endpoint}")]
    Network {
        /// Source the call was issued against
        provider: &'static str,
        /// Endpoint path that was requested
        endpoint: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status code.
    #[error("{provider} endpoint {endpoint} returned HTTP {status}")]
    Api {
        /// Source the call was issued against
        provider: &'static str,
        /// Endpoint path that was requested
        endpoint: String,
        /// HTTP status code of the response
        status: u16,
    },

    /// The response body was not the JSON shape the endpoint promises.
    #[error("could not decode {provider} response from {endpoint}")]
    Decode {
        /// Source the call was issued against
        provider: &'static str,
        /// Endpoint path that was requested
        endpoint: String,
        /// Underlying deserialization error
        #[source]
        source: reqwest::Error,
    },
}

/// Authentication failure while establishing a session.
///
/// Fatal: a session is never constructed from failed credentials, and the
/// caller is expected to halt further interaction and surface the message.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required credential material was not supplied via the environment.
    #[error("missing credentials: {key} is not set")]
    MissingCredentials {
        /// Environment variable expected to hold the credential
        key: &'static str,
    },

    /// The remote service rejected the supplied credentials.
    #[error("{provider} rejected the supplied credentials (HTTP {status})")]
    Rejected {
        /// Source the credentials were presented to
        provider: &'static str,
        /// HTTP status of the validation response
        status: u16,
    },

    /// The remote service could not be reached while validating credentials.
    #[error("could not reach {provider} during sign-in")]
    Network {
        /// Source the credentials were presented to
        provider: &'static str,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },
}

/// Failure while loading the activity table.
///
/// Fatal to the current render pass: the table is all-or-nothing, so a
/// single bad record poisons the whole load and no partial table is ever
/// handed to the caller.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The listing call itself failed.
    #[error("activity listing failed")]
    Source {
        /// Transport error from the listing call
        #[from]
        source: SourceError,
    },

    /// One record did not have the shape the table requires.
    #[error("activity record {index} could not be parsed")]
    Record {
        /// Zero-based position of the record in the listing response
        index: usize,
        /// Field-level deserialization error
        #[source]
        source: serde_json::Error,
    },

    /// One record's start time was not a local `YYYY-MM-DD HH:MM:SS` timestamp.
    #[error("activity {id} has unparseable start time '{value}'")]
    StartTime {
        /// Identifier of the offending activity
        id: String,
        /// The raw timestamp string as received
        value: String,
        /// Underlying timestamp parse error
        #[source]
        source: chrono::ParseError,
    },
}

/// Failure fetching the detail payload for a single activity.
///
/// Recoverable: only the map for the selected activity is withheld; the
/// table, aggregates, and chart stay fully functional.
#[derive(Debug, Error)]
pub enum DetailFetchError {
    /// The detail call for one activity failed.
    #[error("could not fetch detail for activity {id}")]
    Source {
        /// Identifier of the requested activity
        id: String,
        /// Transport error from the detail call
        #[source]
        source: SourceError,
    },
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_source_error_messages_name_the_endpoint() {
        let err = SourceError::Api {
            provider: "garmin",
            endpoint: "activity-service/activity/42/details".to_owned(),
            status: 502,
        };
        assert_eq!(
            err.to_string(),
            "garmin endpoint activity-service/activity/42/details returned HTTP 502"
        );
    }

    #[test]
    fn test_load_error_wraps_source_errors() {
        let err = LoadError::from(SourceError::NotAuthenticated { provider: "garmin" });
        assert!(matches!(err, LoadError::Source { .. }));
        assert_eq!(err.to_string(), "activity listing failed");
    }

    #[test]
    fn test_missing_credentials_names_the_env_var() {
        let err = AuthError::MissingCredentials {
            key: "GARMIN_ACCESS_TOKEN",
        };
        assert_eq!(
            err.to_string(),
            "missing credentials: GARMIN_ACCESS_TOKEN is not set"
        );
    }
}
