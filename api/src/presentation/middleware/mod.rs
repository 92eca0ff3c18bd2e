use axum::{Router, middleware::from_fn_with_state};

use crate::bootstrap::app_context::AppContext;

pub mod client_ip;
pub mod cors;
pub mod origin;
pub mod probe;
pub mod rate_limit;
pub mod security_headers;

/// Wraps `router` in the request guards; the probe check runs first, then origin, then rate limit.
pub fn guard(router: Router, ctx: AppContext) -> Router {
    router
        .layer(from_fn_with_state(ctx.clone(), rate_limit::limit_requests))
        .layer(from_fn_with_state(ctx.clone(), origin::verify_origin))
        .layer(from_fn_with_state(ctx, probe::block_sensitive_paths))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use base64::{Engine as _, engine::general_purpose::STANDARD};
    use tower::ServiceExt;

    use super::*;
    use crate::application::use_cases::blogs::test_support::blog;
    use crate::bootstrap::config::Config;
    use crate::domain::blogs::blog::{Blog, BlogStatus};
    use crate::presentation::http::test_support::{
        ADMIN_PASS, ADMIN_USER, InMemoryPortfolio, context,
    };
    use crate::presentation::http::{blogs, contact, projects};

    fn app_with(posts: Vec<Blog>) -> Router {
        let ctx = context(Config::sample(), posts, InMemoryPortfolio::default(), None);
        let router = Router::new()
            .nest("/api", blogs::routes(ctx.clone()))
            .nest("/api", projects::routes(ctx.clone()))
            .nest("/api", contact::routes(ctx.clone()))
            .fallback(|| async { StatusCode::NOT_FOUND });
        security_headers::apply(guard(router, ctx.clone()).layer(cors::layer(&ctx.cfg)))
    }

    fn app() -> Router {
        app_with(vec![blog("live", BlogStatus::Published, 1)])
    }

    fn basic(user: &str, pass: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{user}:{pass}")))
    }

    fn contact_request(path: &str) -> Request<Body> {
        let payload = serde_json::json!({
            "name": "Grace",
            "email": "grace@example.com",
            "message": "Hello there"
        });
        Request::post(path)
            .header(header::ORIGIN, "https://example.com")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn probes_get_bare_404() {
        let resp = app()
            .oneshot(Request::get("/.ENV").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "The requested resource was not found");
    }

    #[tokio::test]
    async fn unknown_origin_is_forbidden() {
        let resp = app()
            .oneshot(
                Request::get("/api/projects")
                    .header(header::ORIGIN, "https://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn allowed_origin_referer_or_key_pass() {
        let app = app();
        let by_origin = Request::get("/api/projects")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();
        let by_referer = Request::get("/api/projects")
            .header(header::REFERER, "https://example.com/about")
            .body(Body::empty())
            .unwrap();
        let by_key = Request::get("/api/projects")
            .header("X-API-Key", "server-key")
            .body(Body::empty())
            .unwrap();
        for req in [by_origin, by_referer, by_key] {
            let resp = app.clone().oneshot(req).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn public_blog_reads_skip_origin_but_are_rate_limited() {
        let app = app();
        // blog budget in the sample config is three requests per minute
        for _ in 0..3 {
            let resp = app
                .clone()
                .oneshot(Request::get("/api/blogs/published").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }
        let resp = app
            .oneshot(Request::get("/api/blogs/published").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers().get(header::RETRY_AFTER).unwrap(), "60");
    }

    #[tokio::test]
    async fn admin_credentials_pass_without_origin() {
        let app = app();
        let resp = app
            .clone()
            .oneshot(
                Request::get("/api/projects")
                    .header(header::AUTHORIZATION, basic(ADMIN_USER, ADMIN_PASS))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        // admin-only handler behind the same check
        let resp = app
            .clone()
            .oneshot(
                Request::get("/api/blogs")
                    .header(header::AUTHORIZATION, basic(ADMIN_USER, ADMIN_PASS))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .oneshot(
                Request::get("/api/projects")
                    .header(header::AUTHORIZATION, basic(ADMIN_USER, "wrong"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn options_requests_skip_origin_check() {
        let ctx = context(Config::sample(), vec![], InMemoryPortfolio::default(), None);
        let router = Router::new().nest("/api", projects::routes(ctx.clone()));
        let resp = guard(router, ctx)
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/projects")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_ne!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn preflight_gets_cors_headers() {
        let resp = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/contact")
                    .header(header::ORIGIN, "https://example.com")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "https://example.com"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
            "true"
        );
        assert!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).is_some());
    }

    #[tokio::test]
    async fn contact_budget_covers_both_paths() {
        let app = app();
        // contact budget in the sample config is two requests per hour
        for path in ["/api/contact", "/api/contact/"] {
            let resp = app.clone().oneshot(contact_request(path)).await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }
        let resp = app.oneshot(contact_request("/api/contact/")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers().get(header::RETRY_AFTER).unwrap(), "3600");
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["message"],
            "Too many requests. Please try again after 60 minutes."
        );
    }

    #[tokio::test]
    async fn view_recording_skips_origin_and_uses_blog_budget() {
        let post = blog("live", BlogStatus::Published, 1);
        let uri = format!("/api/blogs/{}/view", post.id);
        let app = app_with(vec![post]);
        for _ in 0..3 {
            let resp = app
                .clone()
                .oneshot(Request::post(uri.as_str()).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }
        let resp = app
            .oneshot(Request::post(uri.as_str()).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn security_headers_on_success() {
        let resp = app()
            .oneshot(Request::get("/api/blogs/published").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let headers = resp.headers();
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
        assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_some());
    }
}
