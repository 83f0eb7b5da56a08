//! Session token authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{domain::entities::User, error::AppError, state::AppState};

/// Header carrying the token when a proxy strips `Authorization`.
pub const X_AUTHORIZATION: &str = "x-authorization";
/// Header carrying the bare token.
pub const X_SESSION_TOKEN: &str = "x-session-token";

/// The authenticated caller, inserted into request extensions by [`layer`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// The raw token the caller authenticated with. Needed to close the session on logout.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

/// Authenticates requests using a session token.
///
/// # Token Sources
///
/// Checked in order, first match wins:
///
/// ```text
/// Authorization: Bearer <token>
/// X-Authorization: Bearer <token>     (or the bare token)
/// X-Session-Token: <token>
/// ```
///
/// On success the handler can extract [`CurrentUser`] and [`SessionToken`]
/// via `Extension`.
///
/// # Errors
///
/// Returns `401 Unauthorized` if no token is present, the token is unknown,
/// or the session has expired.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let token = extract_token(&mut parts).await.ok_or_else(|| {
        AppError::unauthorized(
            "Unauthorized",
            serde_json::json!({"reason": "Session token is missing"}),
        )
    })?;

    let user = st.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(user));
    req.extensions_mut().insert(SessionToken(token));

    Ok(next.run(req).await)
}

async fn extract_token(parts: &mut Parts) -> Option<String> {
    if let Ok(AuthBearer(token)) = AuthBearer::from_request_parts(parts, &()).await
        && !token.is_empty()
    {
        return Some(token);
    }

    token_from_custom_headers(&parts.headers)
}

fn token_from_custom_headers(headers: &HeaderMap) -> Option<String> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    if let Some(value) = header(X_AUTHORIZATION) {
        let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    header(X_SESSION_TOKEN).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_x_authorization_with_bearer_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AUTHORIZATION, HeaderValue::from_static("Bearer abc"));

        assert_eq!(token_from_custom_headers(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn test_x_authorization_bare_token() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AUTHORIZATION, HeaderValue::from_static("abc"));

        assert_eq!(token_from_custom_headers(&headers).as_deref(), Some("abc"));
    }

    #[test]
    fn test_x_authorization_wins_over_session_token() {
        let mut headers = HeaderMap::new();
        headers.insert(X_AUTHORIZATION, HeaderValue::from_static("Bearer first"));
        headers.insert(X_SESSION_TOKEN, HeaderValue::from_static("second"));

        assert_eq!(token_from_custom_headers(&headers).as_deref(), Some("first"));
    }

    #[test]
    fn test_session_token_header() {
        let mut headers = HeaderMap::new();
        headers.insert(X_SESSION_TOKEN, HeaderValue::from_static(" tok "));

        assert_eq!(token_from_custom_headers(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn test_no_token() {
        let mut headers = HeaderMap::new();
        headers.insert(X_SESSION_TOKEN, HeaderValue::from_static("  "));

        assert!(token_from_custom_headers(&headers).is_none());
    }
}
