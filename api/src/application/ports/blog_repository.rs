use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::blogs::blog::{Blog, BlogCategory};

/// Raised by `insert`/`save` when the store's unique slug constraint rejects the write.
#[derive(Debug, thiserror::Error)]
#[error("slug '{0}' is already taken")]
pub struct SlugConflict(pub String);

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Every non-deleted post, newest created first.
    async fn list_active(&self) -> anyhow::Result<Vec<Blog>>;
    async fn find_active_by_id(&self, id: Uuid) -> anyhow::Result<Option<Blog>>;
    async fn find_active_by_slug(&self, slug: &str) -> anyhow::Result<Option<Blog>>;
    /// Slugs stay reserved by soft-deleted posts too.
    async fn slug_exists(&self, slug: &str) -> anyhow::Result<bool>;
    /// Fails with [`SlugConflict`] when another post holds the slug.
    async fn insert(&self, blog: &Blog) -> anyhow::Result<Blog>;
    async fn save(&self, blog: &Blog) -> anyhow::Result<Blog>;
    /// Active published posts, newest published first.
    async fn list_published(&self, category: Option<BlogCategory>) -> anyhow::Result<Vec<Blog>>;
    async fn find_published_by_slug(&self, slug: &str) -> anyhow::Result<Option<Blog>>;
    async fn find_published_by_id(&self, id: Uuid) -> anyhow::Result<Option<Blog>>;
    /// Atomically bumps the view counter of an active post.
    async fn increment_views(&self, id: Uuid) -> anyhow::Result<Option<Blog>>;
}
