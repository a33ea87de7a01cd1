use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::api::AppState;
use crate::models::Asset;

/// Step 2 of the nested chain: full detail for one affected asset.
pub async fn get_asset(
    State(state): State<AppState>,
    Path(asset_name): Path<String>,
) -> Result<Json<Asset>, (StatusCode, Json<Value>)> {
    match state.snapshot.asset(&asset_name) {
        Some(asset) => {
            info!(
                %asset_name,
                os = %asset.os_version,
                "Served asset detail"
            );
            Ok(Json(asset.clone()))
        }
        None => {
            warn!(%asset_name, "Asset not found");
            Err((
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Asset not found"})),
            ))
        }
    }
}
