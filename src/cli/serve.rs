use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{self, auth::SharedSecretPolicy, AppState};
use crate::cli::commands::ServeArgs;
use crate::errors::CvebusterError;
use crate::store::Snapshot;

pub async fn handle_serve(args: ServeArgs) -> Result<(), CvebusterError> {
    info!(host = %args.host, port = args.port, "Starting mock API server");

    let snapshot = Snapshot::load(Path::new(&args.assets_file), Path::new(&args.vulns_file))?;
    if snapshot.vulnerability_count() == 0 || snapshot.asset_count() == 0 {
        warn!("One or both tables are empty; lookups will return not-found");
    }

    let state = AppState {
        snapshot: Arc::new(snapshot),
        auth: Arc::new(SharedSecretPolicy::new(args.api_key)),
    };
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| CvebusterError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
