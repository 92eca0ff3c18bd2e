use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header, request::Parts};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::error::ApiError;
use crate::bootstrap::app_context::AppContext;

/// Decodes `Authorization: Basic <base64(user:pass)>`.
pub fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let raw = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = raw.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (user, pass) = text.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

/// Request extension set once the admin's credentials have been verified.
#[derive(Debug, Clone, Copy)]
pub struct AdminVerified;

/// Checks Basic credentials against the configured admin.
/// The argon2 comparison runs on the blocking pool.
pub async fn verify_admin(ctx: &AppContext, credentials: Option<(String, String)>) -> bool {
    let (Some(admin), Some((user, pass))) = (ctx.admin(), credentials) else {
        return false;
    };
    match tokio::task::spawn_blocking(move || admin.verify(&user, &pass)).await {
        Ok(ok) => ok,
        Err(e) => {
            tracing::error!(error = ?e, "admin_verify_join_failed");
            false
        }
    }
}

/// Guard for admin-only handlers. Reuses a verification done earlier in the request.
pub struct AdminAuth;

#[axum::async_trait]
impl FromRequestParts<AppContext> for AdminAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        if parts.extensions.get::<AdminVerified>().is_some() {
            return Ok(AdminAuth);
        }
        let credentials = basic_credentials(&parts.headers);
        if verify_admin(ctx, credentials).await {
            parts.extensions.insert(AdminVerified);
            Ok(AdminAuth)
        } else {
            tracing::warn!(path = %parts.uri.path(), "admin_auth_failed");
            Err(ApiError::Unauthorized)
        }
    }
}
