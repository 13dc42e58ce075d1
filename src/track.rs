// ABOUTME: GPS track extraction from raw activity-detail payloads
// ABOUTME: Tolerates record-shaped and pair-shaped polylines, degrades to empty on anything malformed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

//! On-demand GPS track extraction.
//!
//! A track is derived fresh from one activity's detail payload each time the
//! user selects that activity for the map; nothing here is cached. The empty
//! track is a normal result ("no map to draw"), never an error, which is why
//! every malformed shape in this module folds to `Vec::new()` instead of
//! propagating anything.

use serde_json::Value;

/// Pull the GPS track out of a raw activity-detail payload.
///
/// Garmin nests the polyline under `geoPolylineDTO.polyline`. Depending on
/// endpoint vintage the points arrive either as objects carrying `lat`/`lon`
/// fields or as bare `[lat, lon]` arrays; the first element decides which
/// shape the list is read as, and both normalize to the same ordered
/// `(lat, lon)` sequence. Output order matches input order, since the caller
/// draws the path by connecting consecutive points.
///
/// A point is dropped when either coordinate is missing, non-numeric, or
/// zero; zero doubles as Garmin's filler for "no fix", so a record with a
/// real latitude and a zero longitude is still dropped. A missing container,
/// an empty list, or an unrecognized shape all yield an empty track.
#[must_use]
pub fn extract_track(detail: &Value) -> Vec<(f64, f64)> {
    let Some(points) = detail
        .get("geoPolylineDTO")
        .and_then(|dto| dto.get("polyline"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    match points.first() {
        Some(Value::Object(_)) => points.iter().filter_map(point_from_record).collect(),
        Some(Value::Array(_)) => points.iter().filter_map(point_from_pair).collect(),
        _ => Vec::new(),
    }
}

/// Coordinate pair from an object-shaped point.
// Zero is Garmin's filler for a missing coordinate, an exact value.
#[allow(clippy::float_cmp)]
fn point_from_record(point: &Value) -> Option<(f64, f64)> {
    let lat = point
        .get("lat")
        .and_then(Value::as_f64)
        .filter(|v| *v != 0.0)?;
    let lon = point
        .get("lon")
        .and_then(Value::as_f64)
        .filter(|v| *v != 0.0)?;
    Some((lat, lon))
}

/// Coordinate pair from a bare `[lat, lon]` array, same dropping rules.
#[allow(clippy::float_cmp)]
fn point_from_pair(point: &Value) -> Option<(f64, f64)> {
    let pair = point.as_array()?;
    let lat = pair.first().and_then(Value::as_f64).filter(|v| *v != 0.0)?;
    let lon = pair.get(1).and_then(Value::as_f64).filter(|v| *v != 0.0)?;
    Some((lat, lon))
}
