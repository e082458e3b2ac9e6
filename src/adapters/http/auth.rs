//! Bearer authentication middleware.

use super::jwt::{subject, JwtError, TokenVerifier};
use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` credentials
    MissingToken,
    /// Credentials under a scheme other than bearer
    UnsupportedScheme,
    InvalidToken(JwtError),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::MissingToken => (
                StatusCode::FORBIDDEN,
                Json(json!({ "detail": "Not authenticated" })),
            )
                .into_response(),
            AuthError::UnsupportedScheme => (
                StatusCode::FORBIDDEN,
                Json(json!({ "detail": "Invalid authentication credentials" })),
            )
                .into_response(),
            AuthError::InvalidToken(e) => (
                StatusCode::UNAUTHORIZED,
                [(WWW_AUTHENTICATE, "Bearer")],
                Json(json!({
                    "detail": format!("Invalid authentication credentials: {}", e)
                })),
            )
                .into_response(),
        }
    }
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let value = value.trim();
    let (scheme, token) = match value.split_once(' ') {
        Some((scheme, token)) => (scheme, token.trim()),
        None => (value, ""),
    };
    if scheme.is_empty() || token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::UnsupportedScheme);
    }
    Ok(token)
}

/// Reject requests without a valid bearer token; attach the claims otherwise.
pub async fn require_bearer(
    State(verifier): State<Arc<TokenVerifier>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(request.headers())?;

    let claims = verifier.verify(token).map_err(|e| {
        warn!("JWT validation error: {}", e);
        AuthError::InvalidToken(e)
    })?;
    debug!(user = subject(&claims), path = %request.uri().path(), "authenticated");

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
