use std::collections::HashSet;

use chrono::{Duration, Utc};

use cvebuster::generator::{generate_assets, generate_vulnerabilities};
use cvebuster::utils::timestamp::parse_utc;

const ASSET_TYPES: &[&str] = &["WEB", "APP", "DB", "DC", "FILE", "MAIL"];

#[test]
fn test_asset_names_are_indexed_and_unique() {
    let assets = generate_assets(30);
    assert_eq!(assets.len(), 30);

    let mut seen = HashSet::new();
    for (i, asset) in assets.iter().enumerate() {
        let parts: Vec<&str> = asset.asset_name.split('-').collect();
        assert_eq!(parts.len(), 3, "name: {}", asset.asset_name);
        assert_eq!(parts[0], "SRV");
        assert!(ASSET_TYPES.contains(&parts[1]), "name: {}", asset.asset_name);
        assert_eq!(parts[2], format!("{:03}", i + 1));
        assert!(seen.insert(asset.asset_name.clone()));
    }
}

#[test]
fn test_asset_fields_are_plausible() {
    for asset in generate_assets(50) {
        let octets: Vec<&str> = asset.ip_address.split('.').collect();
        assert_eq!(octets.len(), 4);
        assert_eq!(octets[0], "10");
        for octet in &octets[1..] {
            let n: u16 = octet.parse().unwrap();
            assert!(n <= 255);
        }
        let last_octet: u16 = octets[3].parse().unwrap();
        assert!((1..=254).contains(&last_octet));

        assert!(asset.owner.starts_with("Team-"));
        let last_seen = parse_utc(&asset.last_seen).unwrap();
        assert!(last_seen <= Utc::now());
        assert!(last_seen >= Utc::now() - Duration::hours(49));
    }
}

#[test]
fn test_vulnerability_invariants() {
    let assets = generate_assets(30);
    let asset_names: HashSet<&str> = assets.iter().map(|a| a.asset_name.as_str()).collect();
    let vulns = generate_vulnerabilities(&assets, 50);
    assert_eq!(vulns.len(), 50);

    let now = Utc::now();
    for (i, vuln) in vulns.iter().enumerate() {
        assert_eq!(vuln.vuln_id, format!("CVE-2024-{}", 10_001 + i));
        assert!(vuln.cve_url.ends_with(&vuln.vuln_id));

        // discovery strictly precedes last_modified
        let discovery = parse_utc(&vuln.discovery_date).unwrap();
        let modified = parse_utc(&vuln.last_modified).unwrap();
        assert!(discovery < modified, "vuln: {}", vuln.vuln_id);

        // last_modified is either inside the recent window or 30-90 days old
        assert!(modified <= now);
        assert!(modified >= now - Duration::days(91));

        // referential integrity, 1-5 distinct references
        assert!(!vuln.affected_assets.is_empty() && vuln.affected_assets.len() <= 5);
        let distinct: HashSet<&str> =
            vuln.affected_assets.iter().map(|s| s.as_str()).collect();
        assert_eq!(distinct.len(), vuln.affected_assets.len());
        for name in &vuln.affected_assets {
            assert!(asset_names.contains(name.as_str()), "dangling: {}", name);
        }

        // CVSS stays inside the band its severity implies
        let (lo, hi) = vuln.severity.cvss_range();
        assert!(
            vuln.cvss >= lo && vuln.cvss <= hi,
            "cvss {} outside {:?} band",
            vuln.cvss,
            vuln.severity
        );
    }
}

#[test]
fn test_affected_sample_clamps_to_available_assets() {
    let assets = generate_assets(2);
    for vuln in generate_vulnerabilities(&assets, 20) {
        assert!(!vuln.affected_assets.is_empty() && vuln.affected_assets.len() <= 2);
    }
}

#[test]
fn test_zero_counts_yield_empty_output() {
    let assets = generate_assets(0);
    assert!(assets.is_empty());
    let vulns = generate_vulnerabilities(&assets, 0);
    assert!(vulns.is_empty());
    // no assets to reference: sampling clamps to zero instead of failing
    for vuln in generate_vulnerabilities(&assets, 3) {
        assert!(vuln.affected_assets.is_empty());
    }
}

#[test]
fn test_wire_spellings() {
    let assets = generate_assets(10);
    let vulns = generate_vulnerabilities(&assets, 10);

    for asset in &assets {
        let json = serde_json::to_value(asset).unwrap();
        let patch_status = json["patch_status"].as_str().unwrap();
        assert!([
            "Up to Date",
            "Missing Critical Patches",
            "Missing Important Patches",
            "Missing Optional Patches",
            "Patch Pending Reboot",
        ]
        .contains(&patch_status));
        let location = json["location"].as_str().unwrap();
        assert!(["US-East", "US-West", "EU-West", "APAC-Southeast"].contains(&location));
        assert!(ASSET_TYPES.contains(&json["asset_type"].as_str().unwrap()));
    }

    for vuln in &vulns {
        let json = serde_json::to_value(vuln).unwrap();
        let severity = json["severity"].as_str().unwrap();
        assert!(["Critical", "High", "Medium", "Low"].contains(&severity));
        let status = json["status"].as_str().unwrap();
        assert!(["Open", "In Progress", "Patched", "Mitigated", "Risk Accepted"]
            .contains(&status));
        assert!(json["vuln_type"].as_str().unwrap().len() > 1);
        assert!(json["patch_available"].is_boolean());
        assert!(json["last_modified"].as_str().unwrap().ends_with('Z'));
    }
}
