use serde::{Deserialize, Serialize};

/// Severity level for a vulnerability, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Inclusive CVSS band implied by this severity. Severity is chosen
    /// first and the score is drawn inside the band, not the other way
    /// around.
    pub fn cvss_range(&self) -> (f64, f64) {
        match self {
            Severity::Critical => (9.0, 10.0),
            Severity::High => (7.0, 8.9),
            Severity::Medium => (4.0, 6.9),
            Severity::Low => (0.1, 3.9),
        }
    }
}

/// Category of vulnerability, spelled exactly as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VulnType {
    #[serde(rename = "Remote Code Execution")]
    RemoteCodeExecution,
    #[serde(rename = "Privilege Escalation")]
    PrivilegeEscalation,
    #[serde(rename = "Information Disclosure")]
    InformationDisclosure,
    #[serde(rename = "Denial of Service")]
    DenialOfService,
    #[serde(rename = "SQL Injection")]
    SqlInjection,
    #[serde(rename = "Cross-Site Scripting")]
    CrossSiteScripting,
    #[serde(rename = "Buffer Overflow")]
    BufferOverflow,
}

impl VulnType {
    pub const ALL: [VulnType; 7] = [
        VulnType::RemoteCodeExecution,
        VulnType::PrivilegeEscalation,
        VulnType::InformationDisclosure,
        VulnType::DenialOfService,
        VulnType::SqlInjection,
        VulnType::CrossSiteScripting,
        VulnType::BufferOverflow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VulnType::RemoteCodeExecution => "Remote Code Execution",
            VulnType::PrivilegeEscalation => "Privilege Escalation",
            VulnType::InformationDisclosure => "Information Disclosure",
            VulnType::DenialOfService => "Denial of Service",
            VulnType::SqlInjection => "SQL Injection",
            VulnType::CrossSiteScripting => "Cross-Site Scripting",
            VulnType::BufferOverflow => "Buffer Overflow",
        }
    }
}

/// Remediation state of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VulnStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Patched,
    Mitigated,
    #[serde(rename = "Risk Accepted")]
    RiskAccepted,
}

impl VulnStatus {
    pub const ALL: [VulnStatus; 5] = [
        VulnStatus::Open,
        VulnStatus::InProgress,
        VulnStatus::Patched,
        VulnStatus::Mitigated,
        VulnStatus::RiskAccepted,
    ];
}

/// A modeled security finding with CVSS scoring and references to the
/// assets it affects.
///
/// Timestamps stay as strings: the query layer parses them on demand and
/// tolerates malformed values, so no parse happens at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vulnerability {
    pub vuln_id: String,
    pub vuln_title: String,
    pub severity: Severity,
    pub cvss: f64,
    pub vuln_type: VulnType,
    pub description: String,
    /// `asset_name` references, 1-5 entries, no duplicates within one record.
    pub affected_assets: Vec<String>,
    pub patch_available: bool,
    pub exploit_available: bool,
    pub exploit_public: bool,
    /// UTC timestamp string, always earlier than `last_modified`.
    pub discovery_date: String,
    pub last_modified: String,
    pub status: VulnStatus,
    pub cve_url: String,
}
