use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::api::models::{TimeRange, VulnerabilityIdsResponse};
use crate::api::AppState;
use crate::models::Vulnerability;
use crate::utils::timestamp::parse_utc;

#[derive(Deserialize)]
pub struct IdsQuery {
    #[serde(rename = "startTime")]
    pub start_time: Option<String>,
    #[serde(rename = "endTime")]
    pub end_time: Option<String>,
}

/// Step 0 of the nested chain: list vulnerability ids, optionally filtered
/// by `last_modified`.
pub async fn list_ids(
    State(state): State<AppState>,
    Query(query): Query<IdsQuery>,
) -> Json<VulnerabilityIdsResponse> {
    let filtered = filter_by_time_range(
        state.snapshot.vulnerabilities(),
        query.start_time.as_deref(),
        query.end_time.as_deref(),
    );
    let vulnerability_ids: Vec<String> = filtered.iter().map(|v| v.vuln_id.clone()).collect();

    info!(
        count = vulnerability_ids.len(),
        start = query.start_time.as_deref().unwrap_or("-"),
        end = query.end_time.as_deref().unwrap_or("-"),
        "Listed vulnerability ids"
    );

    Json(VulnerabilityIdsResponse {
        count: vulnerability_ids.len(),
        vulnerability_ids,
        time_range: TimeRange {
            start: query.start_time,
            end: query.end_time,
        },
    })
}

/// Step 1: full detail for one vulnerability, found by linear scan.
pub async fn get_vulnerability(
    State(state): State<AppState>,
    Path(vuln_id): Path<String>,
) -> Result<Json<Vulnerability>, (StatusCode, Json<Value>)> {
    match state.snapshot.vulnerability(&vuln_id) {
        Some(vuln) => {
            info!(
                %vuln_id,
                severity = vuln.severity.as_str(),
                affected = vuln.affected_assets.len(),
                "Served vulnerability detail"
            );
            Ok(Json(vuln.clone()))
        }
        None => {
            warn!(%vuln_id, "Vulnerability not found");
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Vulnerability not found"})),
            ))
        }
    }
}

/// Filter by `last_modified`, both bounds exclusive so a record on a window
/// boundary is never counted by two adjacent polling windows.
///
/// With no bounds at all the table passes through untouched. Once a bound
/// is active, records whose `last_modified` fails to parse are dropped; an
/// unparseable bound disables that side of the filter rather than erroring
/// the request.
fn filter_by_time_range<'a>(
    vulns: &'a [Vulnerability],
    start: Option<&str>,
    end: Option<&str>,
) -> Vec<&'a Vulnerability> {
    if start.is_none() && end.is_none() {
        return vulns.iter().collect();
    }

    let start = start.and_then(parse_bound);
    let end = end.and_then(parse_bound);

    vulns
        .iter()
        .filter(|v| {
            let Some(last_modified) = parse_utc(&v.last_modified) else {
                return false;
            };
            if let Some(start) = start {
                if last_modified <= start {
                    return false;
                }
            }
            if let Some(end) = end {
                if last_modified >= end {
                    return false;
                }
            }
            true
        })
        .collect()
}

fn parse_bound(value: &str) -> Option<DateTime<Utc>> {
    let parsed = parse_utc(value);
    if parsed.is_none() {
        warn!(bound = value, "Unparseable time bound, ignoring it");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator;

    fn vuln(id: &str, last_modified: &str) -> Vulnerability {
        let assets = generator::generate_assets(3);
        let mut v = generator::generate_vulnerabilities(&assets, 1).remove(0);
        v.vuln_id = id.to_string();
        v.last_modified = last_modified.to_string();
        v
    }

    fn ids(filtered: &[&Vulnerability]) -> Vec<String> {
        filtered.iter().map(|v| v.vuln_id.clone()).collect()
    }

    #[test]
    fn test_no_bounds_passes_everything_through() {
        let vulns = vec![
            vuln("CVE-2024-10001", "2025-01-01T00:00:00Z"),
            vuln("CVE-2024-10002", "garbage"),
        ];
        let filtered = filter_by_time_range(&vulns, None, None);
        assert_eq!(ids(&filtered), vec!["CVE-2024-10001", "CVE-2024-10002"]);
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let vulns = vec![
            vuln("before", "2025-01-01T00:00:00Z"),
            vuln("on-start", "2025-01-02T00:00:00Z"),
            vuln("inside", "2025-01-03T00:00:00Z"),
            vuln("on-end", "2025-01-04T00:00:00Z"),
            vuln("after", "2025-01-05T00:00:00Z"),
        ];
        let filtered = filter_by_time_range(
            &vulns,
            Some("2025-01-02T00:00:00Z"),
            Some("2025-01-04T00:00:00Z"),
        );
        assert_eq!(ids(&filtered), vec!["inside"]);
    }

    #[test]
    fn test_unparseable_record_dropped_when_bound_active() {
        let vulns = vec![
            vuln("good", "2025-01-03T00:00:00Z"),
            vuln("bad", "not-a-timestamp"),
        ];
        let filtered = filter_by_time_range(&vulns, Some("2025-01-01T00:00:00Z"), None);
        assert_eq!(ids(&filtered), vec!["good"]);
    }

    #[test]
    fn test_unparseable_bound_is_disabled() {
        let vulns = vec![vuln("good", "2025-01-03T00:00:00Z")];
        let filtered = filter_by_time_range(&vulns, Some("yesterday-ish"), None);
        assert_eq!(ids(&filtered), vec!["good"]);
    }
}
