//! Fixture generator: randomized but internally consistent asset and
//! vulnerability records for the mock API to serve.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{
    Asset, AssetType, Criticality, Location, PatchStatus, Severity, VulnStatus, VulnType,
    Vulnerability,
};
use crate::utils::timestamp::format_utc;

const OS_VERSIONS: &[&str] = &[
    "Windows Server 2022",
    "Windows Server 2019",
    "Windows Server 2016",
    "Ubuntu 22.04 LTS",
    "Ubuntu 20.04 LTS",
    "Red Hat Enterprise Linux 8",
    "Red Hat Enterprise Linux 9",
];

const OWNER_TEAMS: &[&str] = &["Security", "Infrastructure", "Application", "Database"];

const SOFTWARE: &[&str] = &[
    "Apache", "Nginx", "IIS", "MySQL", "PostgreSQL", "Redis", "Tomcat",
];

/// Window within which a vulnerability counts as "recent", in seconds.
/// Roughly 30% of generated records land inside it so a poller filtering
/// on `last_modified` always has a fresh subset to pick up.
pub const RECENT_WINDOW_SECS: i64 = 300;

fn pick<T: Copy>(rng: &mut impl Rng, choices: &[T]) -> T {
    choices[rng.gen_range(0..choices.len())]
}

/// Generate `count` asset records with independently randomized fields.
/// Names are deterministic by index (`SRV-<TYPE>-<NNN>`, 1-based), so they
/// are collision-free regardless of the randomized type.
pub fn generate_assets(count: usize) -> Vec<Asset> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    (1..=count)
        .map(|i| {
            let asset_type = pick(&mut rng, &AssetType::ALL);
            Asset {
                asset_name: format!("SRV-{}-{:03}", asset_type, i),
                asset_type,
                os_version: pick(&mut rng, OS_VERSIONS).to_string(),
                ip_address: format!(
                    "10.{}.{}.{}",
                    rng.gen_range(0..=255),
                    rng.gen_range(0..=255),
                    rng.gen_range(1..=254)
                ),
                criticality: pick(&mut rng, &Criticality::ALL),
                patch_status: pick(&mut rng, &PatchStatus::ALL),
                last_seen: format_utc(now - Duration::hours(rng.gen_range(0..=48))),
                owner: format!("Team-{}", pick(&mut rng, OWNER_TEAMS)),
                location: pick(&mut rng, &Location::ALL),
            }
        })
        .collect()
}

/// Generate `count` vulnerability records cross-referencing `assets`.
///
/// Each record affects 1-5 asset names sampled without replacement (clamped
/// to the available asset count). About 30% get a `last_modified` inside the
/// recent window; the rest sit 30-90 days in the past. `discovery_date` is
/// always 1-30 days before `last_modified`.
pub fn generate_vulnerabilities(assets: &[Asset], count: usize) -> Vec<Vulnerability> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let asset_names: Vec<String> = assets.iter().map(|a| a.asset_name.clone()).collect();

    (1..=count)
        .map(|i| {
            let last_modified = if rng.gen_bool(0.30) {
                now - Duration::seconds(rng.gen_range(0..=RECENT_WINDOW_SECS))
            } else {
                now - Duration::days(rng.gen_range(30..=90))
            };
            let discovery_date = last_modified - Duration::days(rng.gen_range(1..=30));

            let severity = pick(&mut rng, &Severity::ALL);
            let (lo, hi) = severity.cvss_range();
            let cvss = (rng.gen_range(lo..=hi) * 10.0).round() / 10.0;

            let sample_size = rng.gen_range(1..=5).min(asset_names.len());
            let affected_assets: Vec<String> = asset_names
                .choose_multiple(&mut rng, sample_size)
                .cloned()
                .collect();

            let vuln_type = pick(&mut rng, &VulnType::ALL);
            let cve = format!("CVE-2024-{}", 10_000 + i);

            Vulnerability {
                vuln_title: format!(
                    "{} in {}",
                    pick(&mut rng, &VulnType::ALL).as_str(),
                    pick(&mut rng, SOFTWARE)
                ),
                description: format!(
                    "A {} severity vulnerability allowing {}",
                    severity.as_str().to_lowercase(),
                    pick(&mut rng, &VulnType::ALL).as_str().to_lowercase()
                ),
                cve_url: format!("https://nvd.nist.gov/vuln/detail/{}", cve),
                vuln_id: cve,
                severity,
                cvss,
                vuln_type,
                affected_assets,
                patch_available: rng.gen_bool(0.5),
                exploit_available: rng.gen_bool(0.5),
                exploit_public: rng.gen_bool(0.5),
                discovery_date: format_utc(discovery_date),
                last_modified: format_utc(last_modified),
                status: pick(&mut rng, &VulnStatus::ALL),
            }
        })
        .collect()
}
