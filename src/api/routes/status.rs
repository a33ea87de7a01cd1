use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::api::AppState;

/// Unauthenticated service status with a map of the nested call chain.
pub async fn service_status(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "service": "cveBuster Nested API Server",
        "status": "running",
        "vulnerabilities_loaded": state.snapshot.vulnerability_count(),
        "assets_loaded": state.snapshot.asset_count(),
        "endpoints": {
            "step_0_get_ids": "GET /api/vulnerabilities/ids?startTime=<iso8601>&endTime=<iso8601>",
            "step_1_get_vuln_details": "GET /api/vulnerabilities/<vuln_id>",
            "step_2_get_asset_details": "GET /api/assets/<asset_name>"
        }
    }))
}
