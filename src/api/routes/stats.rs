use axum::{extract::State, Json};
use chrono::Utc;

use crate::api::models::{ExpectedApiCallsPerPoll, SeverityDistribution, StatsResponse};
use crate::api::AppState;
use crate::generator::RECENT_WINDOW_SECS;
use crate::models::{Severity, Vulnerability};
use crate::utils::timestamp::parse_utc;

/// Snapshot statistics, recomputed against wall-clock time on every call.
/// The projected per-poll volume is the load this mock exists to exercise
/// in the collector under test.
pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let now = Utc::now();
    let vulns = state.snapshot.vulnerabilities();
    let recent: Vec<&Vulnerability> = vulns.iter().filter(|v| is_recent(v, now)).collect();

    let total_relationships: usize = vulns.iter().map(|v| v.affected_assets.len()).sum();
    let recent_relationships: usize = recent.iter().map(|v| v.affected_assets.len()).sum();

    let mut severity_distribution = SeverityDistribution::default();
    for v in vulns {
        match v.severity {
            Severity::Critical => severity_distribution.critical += 1,
            Severity::High => severity_distribution.high += 1,
            Severity::Medium => severity_distribution.medium += 1,
            Severity::Low => severity_distribution.low += 1,
        }
    }

    Json(StatsResponse {
        total_vulnerabilities: vulns.len(),
        recent_vulnerabilities: recent.len(),
        total_assets: state.snapshot.asset_count(),
        total_vuln_asset_relationships: total_relationships,
        recent_vuln_asset_relationships: recent_relationships,
        expected_api_calls_per_poll: ExpectedApiCallsPerPoll {
            step_0_get_ids: 1,
            step_1_vuln_details: recent.len(),
            step_2_asset_details: recent_relationships,
            total: 1 + recent.len() + recent_relationships,
        },
        severity_distribution,
    })
}

fn is_recent(vuln: &Vulnerability, now: chrono::DateTime<Utc>) -> bool {
    parse_utc(&vuln.last_modified)
        .map(|lm| (now - lm).num_seconds() < RECENT_WINDOW_SECS)
        .unwrap_or(false)
}
