// ABOUTME: Integration tests for GPS track extraction from detail payloads
// ABOUTME: Covers both polyline shapes, coordinate dropping, and graceful degradation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Paceline Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use paceline::track::extract_track;
use serde_json::json;

#[test]
fn test_record_shaped_polyline_extracts_in_order() {
    let detail = json!({
        "activityId": 42,
        "geoPolylineDTO": {
            "polyline": [
                {"lat": 50.08, "lon": 14.43, "altitude": 230.0},
                {"lat": 50.09, "lon": 14.44},
                {"lat": 50.10, "lon": 14.45}
            ]
        }
    });

    assert_eq!(
        extract_track(&detail),
        vec![(50.08, 14.43), (50.09, 14.44), (50.10, 14.45)]
    );
}

#[test]
fn test_pair_shaped_polyline_extracts_the_same_points() {
    let detail = json!({
        "geoPolylineDTO": {
            "polyline": [[50.08, 14.43], [50.09, 14.44]]
        }
    });

    assert_eq!(extract_track(&detail), vec![(50.08, 14.43), (50.09, 14.44)]);
}

#[test]
fn test_missing_container_degrades_to_empty() {
    assert!(extract_track(&json!({})).is_empty());
    assert!(extract_track(&json!({"geoPolylineDTO": {}})).is_empty());
    assert!(extract_track(&json!({"geoPolylineDTO": null})).is_empty());
}

#[test]
fn test_non_array_polyline_degrades_to_empty() {
    let detail = json!({"geoPolylineDTO": {"polyline": "not points"}});
    assert!(extract_track(&detail).is_empty());
}

#[test]
fn test_empty_polyline_degrades_to_empty() {
    let detail = json!({"geoPolylineDTO": {"polyline": []}});
    assert!(extract_track(&detail).is_empty());
}

#[test]
fn test_record_points_with_a_missing_or_zero_coordinate_are_dropped() {
    let detail = json!({
        "geoPolylineDTO": {
            "polyline": [
                {"lat": 50.08, "lon": 14.43},
                {"lat": 0.0, "lon": 14.44},
                {"lat": 50.10, "lon": 0.0},
                {"lon": 14.46},
                {"lat": 50.12, "lon": null},
                {"lat": 50.13, "lon": 14.47}
            ]
        }
    });

    // Only the fully-populated points survive, in their original order.
    assert_eq!(extract_track(&detail), vec![(50.08, 14.43), (50.13, 14.47)]);
}

#[test]
fn test_pair_points_with_a_missing_or_zero_coordinate_are_dropped() {
    let detail = json!({
        "geoPolylineDTO": {
            "polyline": [
                [50.08, 14.43],
                [0.0, 14.44],
                [50.10, 0.0],
                [50.11],
                [50.12, 14.46]
            ]
        }
    });

    assert_eq!(extract_track(&detail), vec![(50.08, 14.43), (50.12, 14.46)]);
}

#[test]
fn test_lone_first_point_without_latitude_yields_an_empty_track() {
    let detail = json!({
        "geoPolylineDTO": {
            "polyline": [{"lon": 14.43}]
        }
    });

    assert!(extract_track(&detail).is_empty());
}

#[test]
fn test_both_shapes_normalize_to_the_same_sequence() {
    let as_records = json!({
        "geoPolylineDTO": {
            "polyline": [
                {"lat": 50.08, "lon": 14.43},
                {"lat": 50.09, "lon": 14.44}
            ]
        }
    });
    let as_pairs = json!({
        "geoPolylineDTO": {
            "polyline": [[50.08, 14.43], [50.09, 14.44]]
        }
    });

    assert_eq!(extract_track(&as_records), extract_track(&as_pairs));
}

#[test]
fn test_shape_is_decided_by_the_first_element() {
    // A pair hiding in a record-shaped list is just a malformed point.
    let detail = json!({
        "geoPolylineDTO": {
            "polyline": [
                {"lat": 50.08, "lon": 14.43},
                [50.09, 14.44]
            ]
        }
    });

    assert_eq!(extract_track(&detail), vec![(50.08, 14.43)]);
}

#[test]
fn test_integer_coordinates_are_accepted() {
    let detail = json!({
        "geoPolylineDTO": {
            "polyline": [{"lat": 50, "lon": 14}]
        }
    });

    assert_eq!(extract_track(&detail), vec![(50.0, 14.0)]);
}
