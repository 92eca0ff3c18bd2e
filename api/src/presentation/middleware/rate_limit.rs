use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use super::client_ip;
use super::origin::is_public_blog_path;
use crate::application::services::rate_limit::Bucket;
use crate::bootstrap::app_context::AppContext;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RateLimited {
    error: &'static str,
    message: String,
    retry_after: u64,
}

fn bucket_for(method: &Method, path: &str) -> Option<Bucket> {
    if *method == Method::POST && (path == "/api/contact" || path == "/api/contact/") {
        Some(Bucket::Contact)
    } else if is_public_blog_path(method, path) {
        Some(Bucket::Blog)
    } else {
        None
    }
}

pub fn too_many_requests(window_minutes: u64) -> Response {
    let retry_after = window_minutes * 60;
    let body = RateLimited {
        error: "Rate limit exceeded",
        message: format!(
            "Too many requests. Please try again after {window_minutes} minutes."
        ),
        retry_after,
    };
    let mut resp = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
    resp.headers_mut()
        .insert(header::RETRY_AFTER, HeaderValue::from(retry_after));
    resp
}

/// Per-client sliding-window budgets for the contact form and public blog reads.
pub async fn limit_requests(State(ctx): State<AppContext>, req: Request, next: Next) -> Response {
    let Some(bucket) = bucket_for(req.method(), req.uri().path()) else {
        return next.run(req).await;
    };
    let ip = client_ip::of_request(&req, ctx.cfg.trust_proxy_headers);
    let (max_requests, window) = ctx.rate_budget(bucket);
    if !ctx.limiter().check(&bucket.key(&ip), max_requests, window) {
        tracing::warn!(%ip, path = %req.uri().path(), bucket = ?bucket, "rate_limit_exceeded");
        return too_many_requests(window.as_secs() / 60);
    }
    next.run(req).await
}
