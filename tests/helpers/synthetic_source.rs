// ABOUTME: In-memory ActivitySource with canned records, failure toggles, and call counters
// ABOUTME: Lets session tests run end-to-end without any network or HTTP mocking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use paceline::config::{DashboardConfig, GarminApiConfig, HttpConfig, LogLevel};
use paceline::errors::{AuthError, SourceError};
use paceline::providers::core::{ActivitySource, Credentials};
use serde_json::{json, Value};

const PROVIDER: &str = "synthetic";

/// In-memory activity source for end-to-end session tests.
///
/// Serves canned listing records and per-id detail payloads. Failure
/// toggles make one endpoint misbehave at a time, and shared counters let a
/// test observe how many calls the session actually issued after the source
/// has been moved into it.
pub struct SyntheticSource {
    records: Vec<Value>,
    details: HashMap<String, Value>,
    reject_auth: bool,
    fail_listing: bool,
    fail_detail: bool,
    list_calls: Arc<AtomicUsize>,
    detail_calls: Arc<AtomicUsize>,
}

impl SyntheticSource {
    pub fn new(records: Vec<Value>) -> Self {
        Self {
            records,
            details: HashMap::new(),
            reject_auth: false,
            fail_listing: false,
            fail_detail: false,
            list_calls: Arc::new(AtomicUsize::new(0)),
            detail_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Register a detail payload served for the given activity id.
    pub fn with_detail(mut self, id: &str, detail: Value) -> Self {
        self.details.insert(id.to_owned(), detail);
        self
    }

    /// Make `authenticate` reject every token with HTTP 401.
    pub fn rejecting_auth(mut self) -> Self {
        self.reject_auth = true;
        self
    }

    /// Make the listing endpoint answer HTTP 503.
    pub fn failing_listing(mut self) -> Self {
        self.fail_listing = true;
        self
    }

    /// Make the detail endpoint answer HTTP 503.
    pub fn failing_detail(mut self) -> Self {
        self.fail_detail = true;
        self
    }

    /// Counter handles that stay readable after the source moves into a
    /// session.
    pub fn counters(&self) -> SourceCounters {
        SourceCounters {
            list: Arc::clone(&self.list_calls),
            detail: Arc::clone(&self.detail_calls),
        }
    }
}

#[async_trait]
impl ActivitySource for SyntheticSource {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn authenticate(&self, _credentials: &Credentials) -> Result<(), AuthError> {
        if self.reject_auth {
            return Err(AuthError::Rejected {
                provider: PROVIDER,
                status: 401,
            });
        }
        Ok(())
    }

    async fn list_activities(&self, offset: usize, limit: usize) -> Result<Vec<Value>, SourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_listing {
            return Err(SourceError::Api {
                provider: PROVIDER,
                endpoint: "activities".to_owned(),
                status: 503,
            });
        }
        Ok(self
            .records
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn get_activity_detail(&self, id: &str) -> Result<Value, SourceError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_detail {
            return Err(SourceError::Api {
                provider: PROVIDER,
                endpoint: format!("activity/{id}"),
                status: 503,
            });
        }
        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| SourceError::Api {
                provider: PROVIDER,
                endpoint: format!("activity/{id}"),
                status: 404,
            })
    }
}

/// Call counters observed from outside the session.
pub struct SourceCounters {
    list: Arc<AtomicUsize>,
    detail: Arc<AtomicUsize>,
}

impl SourceCounters {
    pub fn listing(&self) -> usize {
        self.list.load(Ordering::SeqCst)
    }

    pub fn detail(&self) -> usize {
        self.detail.load(Ordering::SeqCst)
    }
}

/// Configuration used by session tests; no environment reads involved.
pub fn test_config() -> DashboardConfig {
    DashboardConfig {
        garmin: GarminApiConfig {
            base_url: "https://connectapi.garmin.com".to_owned(),
            access_token: Some("synthetic-token".to_owned()),
        },
        max_activities: 1000,
        http: HttpConfig::default(),
        log_level: LogLevel::Info,
    }
}

/// One Garmin-shaped listing record.
///
/// `calories: None` serializes as JSON null, which is exactly how Garmin
/// reports an activity without calorie data.
pub fn record(
    id: u64,
    name: &str,
    type_key: &str,
    start: &str,
    distance: f64,
    duration: f64,
    calories: Option<f64>,
) -> Value {
    json!({
        "activityId": id,
        "activityName": name,
        "startTimeLocal": start,
        "activityType": { "typeKey": type_key },
        "distance": distance,
        "duration": duration,
        "calories": calories,
    })
}

/// Three runs spanning two calendar weeks, newest first like a real listing.
///
/// Totals: 3.5 km, 2100 s, 300 kcal (the newest run reports none). The
/// first week (Monday 2024-05-06) holds 3.0 km, the second 0.5 km.
pub fn three_run_fixture() -> Vec<Value> {
    vec![
        record(
            3,
            "Recovery jog",
            "running",
            "2024-05-14 18:15:00",
            500.0,
            300.0,
            None,
        ),
        record(
            2,
            "Interval session",
            "running",
            "2024-05-08 17:30:00",
            2000.0,
            1200.0,
            Some(200.0),
        ),
        record(
            1,
            "Easy run",
            "running",
            "2024-05-06 07:00:00",
            1000.0,
            600.0,
            Some(100.0),
        ),
    ]
}

/// Detail payload with an object-shaped polyline.
pub fn detail_with_track(points: &[(f64, f64)]) -> Value {
    let polyline: Vec<Value> = points
        .iter()
        .map(|(lat, lon)| json!({ "lat": lat, "lon": lon }))
        .collect();
    json!({ "geoPolylineDTO": { "polyline": polyline } })
}
