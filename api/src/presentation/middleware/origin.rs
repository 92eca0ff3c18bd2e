use axum::{
    Json,
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::client_ip;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::{AdminVerified, basic_credentials, verify_admin};

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Serialize)]
struct OriginRejected {
    error: &'static str,
    status: u16,
}

fn is_exempt(path: &str) -> bool {
    !path.starts_with("/api/")
        || path == "/api/health"
        || path == "/api/info"
        || path == "/api/openapi.json"
        || path.starts_with("/api/docs")
}

/// Blog reads open to anyone; rate limiting guards them instead.
pub fn is_public_blog_path(method: &Method, path: &str) -> bool {
    if path.starts_with("/api/blogs/published") {
        return true;
    }
    *method == Method::POST
        && path
            .strip_prefix("/api/blogs/")
            .and_then(|rest| rest.strip_suffix("/view"))
            .map(|id| !id.is_empty() && !id.contains('/'))
            .unwrap_or(false)
}

/// Lets a request through when it is the admin, carries the server key or comes from an allowed site.
pub async fn verify_origin(
    State(ctx): State<AppContext>,
    mut req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if is_exempt(path)
        || req.method() == Method::OPTIONS
        || is_public_blog_path(req.method(), path)
    {
        return next.run(req).await;
    }

    let by_site = {
        let headers = req.headers();
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
        let policy = ctx.origin_policy();
        header(API_KEY_HEADER)
            .map(|k| policy.is_valid_api_key(k))
            .unwrap_or(false)
            || policy.admits(header("origin"), header("referer"))
    };
    // Password hashing only when cheaper checks have failed.
    let authorized = by_site || {
        let credentials = basic_credentials(req.headers());
        let admin = credentials.is_some() && verify_admin(&ctx, credentials).await;
        if admin {
            req.extensions_mut().insert(AdminVerified);
        }
        admin
    };

    if !authorized {
        let path = req.uri().path();
        let headers = req.headers();
        let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
        tracing::warn!(
            path = %path,
            origin = header("origin").unwrap_or_default(),
            referer = header("referer").unwrap_or_default(),
            ip = %client_ip::of_request(&req, ctx.cfg.trust_proxy_headers),
            user_agent = %client_ip::user_agent(headers),
            "origin_not_authorized"
        );
        let body = OriginRejected {
            error: "Request origin not authorized",
            status: 403,
        };
        return (StatusCode::FORBIDDEN, Json(body)).into_response();
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_blog_paths() {
        assert!(is_public_blog_path(&Method::GET, "/api/blogs/published"));
        assert!(is_public_blog_path(&Method::GET, "/api/blogs/published/category/LIFE"));
        assert!(is_public_blog_path(&Method::POST, "/api/blogs/abc/view"));
        assert!(!is_public_blog_path(&Method::GET, "/api/blogs/abc/view"));
        assert!(!is_public_blog_path(&Method::POST, "/api/blogs//view"));
        assert!(!is_public_blog_path(&Method::GET, "/api/blogs"));
        assert!(!is_public_blog_path(&Method::PUT, "/api/blogs/abc/publish"));
    }

    #[test]
    fn exempt_paths() {
        assert!(is_exempt("/api/health"));
        assert!(is_exempt("/api/docs/index.html"));
        assert!(is_exempt("/api/openapi.json"));
        assert!(is_exempt("/favicon.ico"));
        assert!(!is_exempt("/api/contact"));
        assert!(!is_exempt("/api/projects"));
    }
}
