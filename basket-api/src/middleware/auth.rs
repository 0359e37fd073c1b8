use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

pub const CLIENT_KEY_HEADER: &str = "x-client-key";

/// Shared-secret caller check. Every basket route sits behind this; /ping
/// does not.
///
/// An empty configured key rejects every caller, so an unconfigured
/// deployment fails closed.
pub async fn client_key_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let caller_key = req
        .headers()
        .get(CLIENT_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if state.auth.client_key.is_empty() || caller_key != Some(state.auth.client_key.as_str()) {
        tracing::warn!("unauthorized caller");
        let body = Json(json!({
            "message": "Forbidden",
            "status": StatusCode::FORBIDDEN.as_u16(),
        }));
        return Err((StatusCode::FORBIDDEN, body).into_response());
    }

    Ok(next.run(req).await)
}
