use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use portfolio_api::bootstrap::app_context::{AppContext, AppServices, Repositories};
use portfolio_api::bootstrap::config::Config;
use portfolio_api::infrastructure::db::repositories::{
    blog_repository_sqlx::SqlxBlogRepository,
    certification_repository_sqlx::SqlxCertificationRepository,
    education_repository_sqlx::SqlxEducationRepository,
    experience_repository_sqlx::SqlxExperienceRepository,
    personal_info_repository_sqlx::SqlxPersonalInfoRepository,
    project_repository_sqlx::SqlxProjectRepository, skill_repository_sqlx::SqlxSkillRepository,
};
use portfolio_api::presentation::{http as routes, middleware};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            portfolio_api::presentation::http::health::health,
            portfolio_api::presentation::http::health::info,
            portfolio_api::presentation::http::blogs::list_blogs,
            portfolio_api::presentation::http::blogs::get_blog_by_slug,
            portfolio_api::presentation::http::blogs::get_blog_by_id,
            portfolio_api::presentation::http::blogs::create_blog,
            portfolio_api::presentation::http::blogs::update_blog,
            portfolio_api::presentation::http::blogs::delete_blog,
            portfolio_api::presentation::http::blogs::publish_blog,
            portfolio_api::presentation::http::blogs::unpublish_blog,
            portfolio_api::presentation::http::blogs::get_view_count,
            portfolio_api::presentation::http::blogs::list_published_blogs,
            portfolio_api::presentation::http::blogs::list_published_by_category,
            portfolio_api::presentation::http::blogs::get_published_blog,
            portfolio_api::presentation::http::blogs::get_published_blog_by_id,
            portfolio_api::presentation::http::blogs::record_view,
            portfolio_api::presentation::http::portfolio::get_personal_info,
            portfolio_api::presentation::http::portfolio::update_personal_info,
            portfolio_api::presentation::http::projects::list_projects,
            portfolio_api::presentation::http::experiences::list_experiences,
            portfolio_api::presentation::http::educations::list_educations,
            portfolio_api::presentation::http::certifications::list_certifications,
            portfolio_api::presentation::http::skills::list_skills,
            portfolio_api::presentation::http::contact::submit_contact,
        ),
        components(schemas(
            portfolio_api::presentation::http::health::HealthResp,
            portfolio_api::presentation::http::health::InfoResp,
            portfolio_api::presentation::http::error::ErrorResponse,
            portfolio_api::presentation::http::blogs::BlogResponse,
            portfolio_api::presentation::http::blogs::BlogRequest,
            portfolio_api::presentation::http::blogs::ViewCountResponse,
            portfolio_api::domain::blogs::blog::BlogStatus,
            portfolio_api::domain::blogs::blog::BlogCategory,
            portfolio_api::presentation::http::portfolio::PersonalInfoResponse,
            portfolio_api::presentation::http::portfolio::PersonalInfoRequest,
            portfolio_api::presentation::http::portfolio::SocialLinksDto,
            portfolio_api::presentation::http::projects::ProjectResponse,
            portfolio_api::presentation::http::experiences::ExperienceResponse,
            portfolio_api::presentation::http::educations::EducationResponse,
            portfolio_api::presentation::http::certifications::CertificationResponse,
            portfolio_api::presentation::http::skills::SkillGroupResponse,
            portfolio_api::presentation::http::contact::ContactRequest,
            portfolio_api::presentation::http::contact::ContactResponse,
        )),
        tags(
            (name = "Blogs", description = "Blog administration (HTTP Basic)"),
            (name = "Public Blogs", description = "Published posts and view tracking"),
            (name = "Portfolio", description = "Owner profile, projects, experience, education, certifications and skills"),
            (name = "Contact", description = "Contact form"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "api=debug,portfolio_api=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let mut cfg = Config::from_env()?;
    info!(?cfg, "Starting portfolio backend");

    // Database
    let pool =
        portfolio_api::infrastructure::db::connect_pool(&cfg.database_url, cfg.db_max_connections)
            .await?;
    portfolio_api::infrastructure::db::migrate(&pool).await?;

    let repos = Repositories {
        blogs: Arc::new(SqlxBlogRepository::new(pool.clone())),
        personal_info: Arc::new(SqlxPersonalInfoRepository::new(pool.clone())),
        projects: Arc::new(SqlxProjectRepository::new(pool.clone())),
        experiences: Arc::new(SqlxExperienceRepository::new(pool.clone())),
        educations: Arc::new(SqlxEducationRepository::new(pool.clone())),
        certifications: Arc::new(SqlxCertificationRepository::new(pool.clone())),
        skills: Arc::new(SqlxSkillRepository::new(pool.clone())),
    };
    let email_sender = portfolio_api::infrastructure::mail::build_email_sender(&cfg)?;
    let services = AppServices::new(&mut cfg, repos, email_sender)?;
    let ctx = AppContext::new(cfg.clone(), services);

    if cfg.trust_proxy_headers {
        tracing::warn!(
            "proxy_headers_trusted: make sure the proxy strips client supplied X-Forwarded-For and X-Real-IP"
        );
    }

    // Build API router
    let api_router = Router::new()
        .nest("/api", routes::health::routes(pool.clone()))
        .nest("/api", routes::blogs::routes(ctx.clone()))
        .nest("/api", routes::portfolio::routes(ctx.clone()))
        .nest("/api", routes::projects::routes(ctx.clone()))
        .nest("/api", routes::experiences::routes(ctx.clone()))
        .nest("/api", routes::educations::routes(ctx.clone()))
        .nest("/api", routes::certifications::routes(ctx.clone()))
        .nest("/api", routes::skills::routes(ctx.clone()))
        .nest("/api", routes::contact::routes(ctx.clone()))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .fallback(|| async { http::StatusCode::NOT_FOUND });

    let app = middleware::security_headers::apply(
        middleware::guard(api_router, ctx.clone()).layer(middleware::cors::layer(&cfg)),
    )
    .layer(
        TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
            let method = req.method().clone();
            let uri = req.uri().clone();
            let matched = req
                .extensions()
                .get::<MatchedPath>()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default();
            tracing::info_span!("http", %method, %uri, matched_path = %matched)
        }),
    );

    let api_addr = SocketAddr::from(([0, 0, 0, 0], cfg.api_port));
    info!(%api_addr, "HTTP API listening");
    let listener = tokio::net::TcpListener::bind(api_addr).await?;

    let api_handle: JoinHandle<anyhow::Result<()>> = tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await?;
        Ok(())
    });

    // Background rate-limit cleanup
    let limiter = ctx.limiter();
    let widest = cfg.widest_rate_window();
    let cleanup_every = Duration::from_secs(cfg.rate_limit_cleanup_secs.max(1));
    let cleanup_handle: JoinHandle<()> = tokio::spawn(async move {
        let mut ticker = interval(cleanup_every);
        loop {
            ticker.tick().await;
            let limiter = limiter.clone();
            match tokio::task::spawn_blocking(move || limiter.cleanup(widest)).await {
                Ok(_) => {}
                Err(e) => tracing::error!(error = ?e, "rate_limit_cleanup_failed"),
            }
        }
    });

    match api_handle.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!(?e, "API server task failed"),
        Err(e) => error!(?e, "API server task panicked"),
    }
    cleanup_handle.abort();
    Ok(())
}
