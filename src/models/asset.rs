use std::fmt;

use serde::{Deserialize, Serialize};

/// Server role; doubles as the middle token of the asset name
/// (`SRV-<TYPE>-<NNN>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AssetType {
    Web,
    App,
    Db,
    Dc,
    File,
    Mail,
}

impl AssetType {
    pub const ALL: [AssetType; 6] = [
        AssetType::Web,
        AssetType::App,
        AssetType::Db,
        AssetType::Dc,
        AssetType::File,
        AssetType::Mail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Web => "WEB",
            AssetType::App => "APP",
            AssetType::Db => "DB",
            AssetType::Dc => "DC",
            AssetType::File => "FILE",
            AssetType::Mail => "MAIL",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Business criticality of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criticality {
    Critical,
    High,
    Medium,
    Low,
}

impl Criticality {
    pub const ALL: [Criticality; 4] = [
        Criticality::Critical,
        Criticality::High,
        Criticality::Medium,
        Criticality::Low,
    ];
}

/// Patch posture as the vendor feed reports it, spelled exactly as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatchStatus {
    #[serde(rename = "Up to Date")]
    UpToDate,
    #[serde(rename = "Missing Critical Patches")]
    MissingCriticalPatches,
    #[serde(rename = "Missing Important Patches")]
    MissingImportantPatches,
    #[serde(rename = "Missing Optional Patches")]
    MissingOptionalPatches,
    #[serde(rename = "Patch Pending Reboot")]
    PatchPendingReboot,
}

impl PatchStatus {
    pub const ALL: [PatchStatus; 5] = [
        PatchStatus::UpToDate,
        PatchStatus::MissingCriticalPatches,
        PatchStatus::MissingImportantPatches,
        PatchStatus::MissingOptionalPatches,
        PatchStatus::PatchPendingReboot,
    ];
}

/// Datacenter region hosting the asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "US-East")]
    UsEast,
    #[serde(rename = "US-West")]
    UsWest,
    #[serde(rename = "EU-West")]
    EuWest,
    #[serde(rename = "APAC-Southeast")]
    ApacSoutheast,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::UsEast,
        Location::UsWest,
        Location::EuWest,
        Location::ApacSoutheast,
    ];
}

/// A modeled server/endpoint with identity, OS, network, and ownership
/// metadata. `asset_name` is the lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub asset_name: String,
    pub asset_type: AssetType,
    pub os_version: String,
    pub ip_address: String,
    pub criticality: Criticality,
    pub patch_status: PatchStatus,
    /// UTC timestamp string, `YYYY-MM-DDTHH:MM:SSZ`.
    pub last_seen: String,
    pub owner: String,
    pub location: Location,
}
