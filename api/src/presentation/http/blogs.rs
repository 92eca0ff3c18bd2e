use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::auth::AdminAuth;
use super::error::ApiError;
use super::response::{self, Envelope};
use crate::application::use_cases::blogs::create_blog::CreateBlog;
use crate::application::use_cases::blogs::delete_blog::DeleteBlog;
use crate::application::use_cases::blogs::get_blog::{GetBlogById, GetBlogBySlug};
use crate::application::use_cases::blogs::list_blogs::ListBlogs;
use crate::application::use_cases::blogs::list_published::{
    GetPublishedBlog, ListPublishedBlogs, PublishedKey,
};
use crate::application::use_cases::blogs::publish_blog::{PublishBlog, UnpublishBlog};
use crate::application::use_cases::blogs::record_view::{GetBlogViews, RecordBlogView};
use crate::application::use_cases::blogs::update_blog::UpdateBlog;
use crate::application::use_cases::blogs::BlogError;
use crate::bootstrap::app_context::AppContext;
use crate::domain::blogs::blog::{Blog, BlogCategory, BlogDraft, BlogStatus};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub reading_time: Option<i32>,
    pub view_count: i64,
    pub status: BlogStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub category: Option<BlogCategory>,
}

impl From<Blog> for BlogResponse {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            content: b.content,
            slug: b.slug,
            created_at: b.created_at,
            updated_at: b.updated_at,
            excerpt: b.excerpt,
            featured_image: b.featured_image,
            reading_time: b.reading_time,
            view_count: b.view_count,
            status: b.status,
            published_at: b.published_at,
            is_active: b.is_active,
            category: b.category,
        }
    }
}

// Missing strings default to empty so validation reports them field by field.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub slug: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub reading_time: Option<i32>,
    pub status: Option<BlogStatus>,
    pub category: Option<BlogCategory>,
}

impl From<BlogRequest> for BlogDraft {
    fn from(r: BlogRequest) -> Self {
        BlogDraft {
            title: r.title,
            content: r.content,
            slug: r.slug,
            excerpt: r.excerpt,
            featured_image: r.featured_image,
            reading_time: r.reading_time,
            status: r.status,
            category: r.category,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewCountResponse {
    pub id: Uuid,
    pub view_count: i64,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route("/blogs/published", get(list_published_blogs))
        .route(
            "/blogs/published/category/:category",
            get(list_published_by_category),
        )
        .route("/blogs/published/id/:id", get(get_published_blog_by_id))
        .route("/blogs/published/:slug", get(get_published_blog))
        .route("/blogs/id/:id", get(get_blog_by_id))
        .route(
            "/blogs/:key",
            get(get_blog_by_slug).put(update_blog).delete(delete_blog),
        )
        .route("/blogs/:key/publish", put(publish_blog))
        .route("/blogs/:key/unpublish", put(unpublish_blog))
        .route("/blogs/:key/view", post(record_view))
        .route("/blogs/:key/views", get(get_view_count))
        .with_state(ctx)
}

fn parse_blog_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw)
        .map_err(|_| BlogError::NotFound(format!("Blog with ID '{raw}' not found")).into())
}

fn parse_category(raw: &str) -> Result<BlogCategory, ApiError> {
    BlogCategory::parse(&raw.trim().to_uppercase())
        .ok_or_else(|| ApiError::BadRequest(format!("Unknown blog category '{raw}'")))
}

#[utoipa::path(get, path = "/api/blogs", tag = "Blogs", responses(
    (status = 200, body = [BlogResponse]),
    (status = 401, body = super::error::ErrorResponse)
))]
pub async fn list_blogs(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
) -> Result<Json<Vec<BlogResponse>>, ApiError> {
    let repo = ctx.blog_repo();
    let uc = ListBlogs {
        repo: repo.as_ref(),
    };
    let blogs = uc.execute().await?;
    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

#[utoipa::path(get, path = "/api/blogs/{slug}", tag = "Blogs",
    params(("slug" = String, Path, description = "Blog slug")),
    responses((status = 200, body = BlogResponse), (status = 404, body = super::error::ErrorResponse)))]
pub async fn get_blog_by_slug(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
    Path(slug): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let repo = ctx.blog_repo();
    let uc = GetBlogBySlug {
        repo: repo.as_ref(),
    };
    let blog = uc
        .execute(&slug)
        .await?
        .ok_or_else(|| ApiError::BlogNotFound(format!("Blog with slug '{slug}' not found")))?;
    Ok(Json(blog.into()))
}

#[utoipa::path(get, path = "/api/blogs/id/{id}", tag = "Blogs",
    params(("id" = String, Path, description = "Blog id")),
    responses((status = 200, body = BlogResponse), (status = 404, body = super::error::ErrorResponse)))]
pub async fn get_blog_by_id(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
    Path(id): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let id = parse_blog_id(&id)?;
    let repo = ctx.blog_repo();
    let uc = GetBlogById {
        repo: repo.as_ref(),
    };
    let blog = uc
        .execute(id)
        .await?
        .ok_or_else(|| BlogError::not_found_id(id))?;
    Ok(Json(blog.into()))
}

#[utoipa::path(post, path = "/api/blogs", tag = "Blogs", request_body = BlogRequest, responses(
    (status = 201, body = BlogResponse),
    (status = 400, body = super::error::ErrorResponse),
    (status = 409, body = super::error::ErrorResponse)
))]
pub async fn create_blog(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
    Json(req): Json<BlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), ApiError> {
    let repo = ctx.blog_repo();
    let uc = CreateBlog {
        repo: repo.as_ref(),
    };
    let blog = uc.execute(req.into()).await?;
    Ok((StatusCode::CREATED, Json(blog.into())))
}

#[utoipa::path(put, path = "/api/blogs/{id}", tag = "Blogs", request_body = BlogRequest,
    params(("id" = String, Path, description = "Blog id")),
    responses(
        (status = 200, body = BlogResponse),
        (status = 404, body = super::error::ErrorResponse),
        (status = 409, body = super::error::ErrorResponse)
    ))]
pub async fn update_blog(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
    Path(id): Path<String>,
    Json(req): Json<BlogRequest>,
) -> Result<Json<BlogResponse>, ApiError> {
    let id = parse_blog_id(&id)?;
    let repo = ctx.blog_repo();
    let uc = UpdateBlog {
        repo: repo.as_ref(),
    };
    let blog = uc.execute(id, req.into()).await?;
    Ok(Json(blog.into()))
}

#[utoipa::path(delete, path = "/api/blogs/{id}", tag = "Blogs",
    params(("id" = String, Path, description = "Blog id")),
    responses((status = 204), (status = 404, body = super::error::ErrorResponse)))]
pub async fn delete_blog(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_blog_id(&id)?;
    let repo = ctx.blog_repo();
    let uc = DeleteBlog {
        repo: repo.as_ref(),
    };
    uc.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(put, path = "/api/blogs/{id}/publish", tag = "Blogs",
    params(("id" = String, Path, description = "Blog id")),
    responses((status = 200, body = BlogResponse), (status = 404, body = super::error::ErrorResponse)))]
pub async fn publish_blog(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
    Path(id): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let id = parse_blog_id(&id)?;
    let repo = ctx.blog_repo();
    let uc = PublishBlog {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

#[utoipa::path(put, path = "/api/blogs/{id}/unpublish", tag = "Blogs",
    params(("id" = String, Path, description = "Blog id")),
    responses((status = 200, body = BlogResponse), (status = 404, body = super::error::ErrorResponse)))]
pub async fn unpublish_blog(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
    Path(id): Path<String>,
) -> Result<Json<BlogResponse>, ApiError> {
    let id = parse_blog_id(&id)?;
    let repo = ctx.blog_repo();
    let uc = UnpublishBlog {
        repo: repo.as_ref(),
    };
    Ok(Json(uc.execute(id).await?.into()))
}

#[utoipa::path(get, path = "/api/blogs/{id}/views", tag = "Blogs",
    params(("id" = String, Path, description = "Blog id")),
    responses((status = 200, body = ViewCountResponse), (status = 404, body = super::error::ErrorResponse)))]
pub async fn get_view_count(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
    Path(id): Path<String>,
) -> Result<Json<ViewCountResponse>, ApiError> {
    let id = parse_blog_id(&id)?;
    let repo = ctx.blog_repo();
    let uc = GetBlogViews {
        repo: repo.as_ref(),
    };
    let view_count = uc
        .execute(id)
        .await?
        .ok_or_else(|| BlogError::not_found_id(id))?;
    Ok(Json(ViewCountResponse { id, view_count }))
}

#[utoipa::path(get, path = "/api/blogs/published", tag = "Public Blogs", security(()), responses(
    (status = 200, description = "Envelope with published posts")
))]
pub async fn list_published_blogs(
    State(ctx): State<AppContext>,
) -> Result<Envelope<Vec<BlogResponse>>, ApiError> {
    let repo = ctx.blog_repo();
    let uc = ListPublishedBlogs {
        repo: repo.as_ref(),
    };
    let blogs = uc.execute(None).await?;
    Ok(response::ok(
        blogs.into_iter().map(BlogResponse::from).collect(),
        "Published blogs retrieved successfully",
    ))
}

#[utoipa::path(get, path = "/api/blogs/published/category/{category}", tag = "Public Blogs", security(()),
    params(("category" = BlogCategory, Path, description = "TECHNICAL, LIFE or CAREER")),
    responses((status = 200, description = "Envelope with published posts in the category")))]
pub async fn list_published_by_category(
    State(ctx): State<AppContext>,
    Path(category): Path<String>,
) -> Result<Envelope<Vec<BlogResponse>>, ApiError> {
    let category = parse_category(&category)?;
    let repo = ctx.blog_repo();
    let uc = ListPublishedBlogs {
        repo: repo.as_ref(),
    };
    let blogs = uc.execute(Some(category)).await?;
    Ok(response::ok(
        blogs.into_iter().map(BlogResponse::from).collect(),
        format!("Published blogs in category '{category}' retrieved successfully"),
    ))
}

#[utoipa::path(get, path = "/api/blogs/published/{slug}", tag = "Public Blogs", security(()),
    params(("slug" = String, Path, description = "Blog slug")),
    responses(
        (status = 200, description = "Envelope with the post"),
        (status = 404, description = "Envelope with the not-found message")
    ))]
pub async fn get_published_blog(
    State(ctx): State<AppContext>,
    Path(slug): Path<String>,
) -> Result<Envelope<BlogResponse>, ApiError> {
    let repo = ctx.blog_repo();
    let uc = GetPublishedBlog {
        repo: repo.as_ref(),
    };
    Ok(match uc.execute(PublishedKey::Slug(&slug)).await? {
        Some(blog) => response::ok(
            blog.into(),
            format!("Blog with slug '{slug}' retrieved successfully"),
        ),
        None => {
            tracing::debug!(%slug, "published_blog_not_found");
            response::not_found(format!("Blog with slug '{slug}' not found"))
        }
    })
}

#[utoipa::path(get, path = "/api/blogs/published/id/{id}", tag = "Public Blogs", security(()),
    params(("id" = String, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Envelope with the post"),
        (status = 404, description = "Envelope with the not-found message")
    ))]
pub async fn get_published_blog_by_id(
    State(ctx): State<AppContext>,
    Path(raw): Path<String>,
) -> Result<Envelope<BlogResponse>, ApiError> {
    let not_found = || response::not_found(format!("Blog with ID '{raw}' not found"));
    let Ok(id) = Uuid::parse_str(&raw) else {
        return Ok(not_found());
    };
    let repo = ctx.blog_repo();
    let uc = GetPublishedBlog {
        repo: repo.as_ref(),
    };
    Ok(match uc.execute(PublishedKey::Id(id)).await? {
        Some(blog) => response::ok(blog.into(), "Blog retrieved successfully"),
        None => not_found(),
    })
}

#[utoipa::path(post, path = "/api/blogs/{id}/view", tag = "Public Blogs", security(()),
    params(("id" = String, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Envelope with the updated post"),
        (status = 404, description = "Envelope with the not-found message")
    ))]
pub async fn record_view(
    State(ctx): State<AppContext>,
    Path(raw): Path<String>,
) -> Result<Envelope<BlogResponse>, ApiError> {
    let not_found = || response::not_found(format!("Blog with ID '{raw}' not found"));
    let Ok(id) = Uuid::parse_str(&raw) else {
        return Ok(not_found());
    };
    let repo = ctx.blog_repo();
    let uc = RecordBlogView {
        repo: repo.as_ref(),
    };
    Ok(match uc.execute(id).await? {
        Some(blog) => response::ok(blog.into(), "View count incremented successfully"),
        None => not_found(),
    })
}
