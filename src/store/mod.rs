//! Read-only in-memory snapshot of the two fixture documents.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::errors::CvebusterError;
use crate::models::{Asset, Vulnerability};

/// The two loaded tables, immutable for the lifetime of the process.
///
/// Constructed once at startup (or directly in tests) and shared behind an
/// `Arc`; nothing mutates it after load, so handlers need no locking.
pub struct Snapshot {
    vulnerabilities: Vec<Vulnerability>,
    assets: HashMap<String, Asset>,
}

impl Snapshot {
    pub fn new(assets: Vec<Asset>, vulnerabilities: Vec<Vulnerability>) -> Self {
        let assets = assets
            .into_iter()
            .map(|a| (a.asset_name.clone(), a))
            .collect();
        Snapshot {
            vulnerabilities,
            assets,
        }
    }

    /// Load both documents from disk. A missing file yields an empty table
    /// and a warning, not an error; every lookup then returns not-found.
    /// Malformed JSON is still fatal.
    pub fn load(assets_path: &Path, vulns_path: &Path) -> Result<Self, CvebusterError> {
        let assets: Vec<Asset> = load_table(assets_path, "asset")?;
        let vulnerabilities: Vec<Vulnerability> = load_table(vulns_path, "vulnerability")?;
        info!(
            assets = assets.len(),
            vulnerabilities = vulnerabilities.len(),
            "Snapshot loaded"
        );
        Ok(Snapshot::new(assets, vulnerabilities))
    }

    /// All vulnerabilities in load order.
    pub fn vulnerabilities(&self) -> &[Vulnerability] {
        &self.vulnerabilities
    }

    /// Linear scan by `vuln_id`; fine at fixture scale.
    pub fn vulnerability(&self, vuln_id: &str) -> Option<&Vulnerability> {
        self.vulnerabilities.iter().find(|v| v.vuln_id == vuln_id)
    }

    pub fn asset(&self, asset_name: &str) -> Option<&Asset> {
        self.assets.get(asset_name)
    }

    pub fn vulnerability_count(&self) -> usize {
        self.vulnerabilities.len()
    }

    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }
}

fn load_table<T: DeserializeOwned>(path: &Path, what: &str) -> Result<Vec<T>, CvebusterError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(
                path = %path.display(),
                "{} file not found, serving an empty table; run `cvebuster generate` first",
                what
            );
            Ok(Vec::new())
        }
        Err(e) => Err(e.into()),
    }
}
