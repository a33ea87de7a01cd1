use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::api::AppState;

/// Decides whether a request may reach the data endpoints. Injected into
/// the router state so tests can substitute their own policy.
pub trait AuthPolicy: Send + Sync {
    fn authorize(&self, headers: &HeaderMap) -> bool;
}

/// Byte-for-byte comparison of the raw `Authorization` header against a
/// fixed shared secret. No scheme prefix: the vendor feeds this mock
/// imitates send bare API keys.
pub struct SharedSecretPolicy {
    secret: String,
}

impl SharedSecretPolicy {
    pub fn new(secret: impl Into<String>) -> Self {
        SharedSecretPolicy {
            secret: secret.into(),
        }
    }
}

impl AuthPolicy for SharedSecretPolicy {
    fn authorize(&self, headers: &HeaderMap) -> bool {
        headers
            .get(header::AUTHORIZATION)
            .map(|value| value.as_bytes() == self.secret.as_bytes())
            .unwrap_or(false)
    }
}

pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    if !state.auth.authorize(request.headers()) {
        warn!(path = %request.uri().path(), "Rejected unauthorized request");
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Unauthorized"})),
        ));
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_shared_secret_exact_match() {
        let policy = SharedSecretPolicy::new("cvebuster-nested-key");
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("cvebuster-nested-key"),
        );
        assert!(policy.authorize(&headers));
    }

    #[test]
    fn test_shared_secret_rejects_scheme_prefix() {
        let policy = SharedSecretPolicy::new("cvebuster-nested-key");
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer cvebuster-nested-key"),
        );
        assert!(!policy.authorize(&headers));
    }

    #[test]
    fn test_shared_secret_rejects_missing_header() {
        let policy = SharedSecretPolicy::new("cvebuster-nested-key");
        assert!(!policy.authorize(&HeaderMap::new()));
    }
}
