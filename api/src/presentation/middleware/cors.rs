use http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::bootstrap::config::Config;

/// CORS policy for the API; with no configured origins the request origin is mirrored.
pub fn layer(cfg: &Config) -> CorsLayer {
    let methods: Vec<Method> = cfg
        .cors_allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    let origins: Vec<HeaderValue> = cfg
        .cors_allowed_origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    let base = CorsLayer::new()
        .allow_methods(methods)
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-api-key"),
        ])
        .max_age(std::time::Duration::from_secs(cfg.cors_max_age_secs));
    if origins.is_empty() {
        // Development convenience; production refuses to start without origins.
        base.allow_origin(AllowOrigin::mirror_request())
    } else {
        base.allow_origin(origins)
            .allow_credentials(cfg.cors_allow_credentials)
    }
}
