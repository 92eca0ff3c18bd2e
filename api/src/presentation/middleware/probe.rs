use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::client_ip;
use crate::bootstrap::app_context::AppContext;

#[derive(Serialize)]
struct ProbeBlocked {
    error: &'static str,
    status: u16,
    message: &'static str,
}

/// Answers scans for well-known secret files with a bare 404.
pub async fn block_sensitive_paths(
    State(ctx): State<AppContext>,
    req: Request,
    next: Next,
) -> Response {
    if ctx.probe_policy().is_sensitive(req.uri().path()) {
        tracing::warn!(
            path = %req.uri().path(),
            ip = %client_ip::of_request(&req, ctx.cfg.trust_proxy_headers),
            user_agent = %client_ip::user_agent(req.headers()),
            "sensitive_path_probe_blocked"
        );
        let body = ProbeBlocked {
            error: "Not Found",
            status: 404,
            message: "The requested resource was not found",
        };
        return (StatusCode::NOT_FOUND, Json(body)).into_response();
    }
    next.run(req).await
}
