//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, resolves it to a persisted user, and injects request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use renthub_core::error::AppError;
use renthub_service::context::RequestContext;

use crate::state::AppState;

/// Extracted authenticated caller context available in handlers.
///
/// Rejections carry the resolver's distinction intact: a bad or expired
/// token is 401, a valid token for a since-deleted user is 404.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let user = state.identity_resolver.resolve_bearer(header).await?;

        Ok(AuthUser(RequestContext::from(&user)))
    }
}

