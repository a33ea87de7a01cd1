use serde::Serialize;

/// Raw (unparsed) filter bounds echoed back to the caller.
#[derive(Serialize)]
pub struct TimeRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Serialize)]
pub struct VulnerabilityIdsResponse {
    pub vulnerability_ids: Vec<String>,
    pub count: usize,
    pub time_range: TimeRange,
}

/// Call volume a poller produces against the nested chain: one id listing,
/// one detail call per recent vulnerability, one asset call per recent
/// vuln-asset relationship.
#[derive(Serialize)]
pub struct ExpectedApiCallsPerPoll {
    pub step_0_get_ids: usize,
    pub step_1_vuln_details: usize,
    pub step_2_asset_details: usize,
    pub total: usize,
}

#[derive(Serialize, Default)]
pub struct SeverityDistribution {
    #[serde(rename = "Critical")]
    pub critical: usize,
    #[serde(rename = "High")]
    pub high: usize,
    #[serde(rename = "Medium")]
    pub medium: usize,
    #[serde(rename = "Low")]
    pub low: usize,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub total_vulnerabilities: usize,
    pub recent_vulnerabilities: usize,
    pub total_assets: usize,
    pub total_vuln_asset_relationships: usize,
    pub recent_vuln_asset_relationships: usize,
    pub expected_api_calls_per_poll: ExpectedApiCallsPerPoll,
    pub severity_distribution: SeverityDistribution,
}
