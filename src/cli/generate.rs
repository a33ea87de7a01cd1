use chrono::Utc;
use tracing::info;

use crate::cli::commands::GenerateArgs;
use crate::errors::CvebusterError;
use crate::generator::{self, RECENT_WINDOW_SECS};
use crate::utils::timestamp::parse_utc;

pub fn handle_generate(args: GenerateArgs) -> Result<(), CvebusterError> {
    info!(
        assets = args.assets,
        vulns = args.vulns,
        "Generating fixture data"
    );

    let assets = generator::generate_assets(args.assets);
    std::fs::write(&args.assets_file, serde_json::to_string_pretty(&assets)?)?;
    info!(path = %args.assets_file, count = assets.len(), "Wrote asset document");

    let vulns = generator::generate_vulnerabilities(&assets, args.vulns);
    std::fs::write(&args.vulns_file, serde_json::to_string_pretty(&vulns)?)?;
    info!(path = %args.vulns_file, count = vulns.len(), "Wrote vulnerability document");

    // Summary of the per-poll call volume this data will produce.
    let now = Utc::now();
    let mut recent = 0usize;
    let mut recent_relationships = 0usize;
    let mut total_relationships = 0usize;
    for v in &vulns {
        total_relationships += v.affected_assets.len();
        let fresh = parse_utc(&v.last_modified)
            .map(|lm| (now - lm).num_seconds() < RECENT_WINDOW_SECS)
            .unwrap_or(false);
        if fresh {
            recent += 1;
            recent_relationships += v.affected_assets.len();
        }
    }

    info!(
        recent,
        old = vulns.len() - recent,
        total_relationships,
        expected_calls_per_poll = 1 + recent + recent_relationships,
        "Fixture distribution"
    );

    Ok(())
}
