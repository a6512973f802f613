use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::IntoResponse,
};
use subtle::ConstantTimeEq;

use crate::api_error;
use crate::error::ApiError;
use crate::AppState;

/// Bearer-token gate for the scrape route. Runs before body extraction, so a
/// bad token is rejected no matter what the request carries.
pub async fn bearer_auth_middleware(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| api_error!(Unauthorized, "Invalid authentication"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| api_error!(Unauthorized, "Invalid authentication"))?;

    let expected = state.config.auth_token.as_bytes();
    if token.as_bytes().ct_eq(expected).unwrap_u8() != 1 {
        return Err(api_error!(Unauthorized, "Invalid authentication"));
    }

    Ok(next.run(req).await)
}
