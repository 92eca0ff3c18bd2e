use uuid::Uuid;

use crate::application::ports::blog_repository::BlogRepository;
use crate::domain::blogs::blog::{Blog, BlogCategory};

pub struct ListPublishedBlogs<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> ListPublishedBlogs<'a, R> {
    pub async fn execute(&self, category: Option<BlogCategory>) -> anyhow::Result<Vec<Blog>> {
        self.repo.list_published(category).await
    }
}

/// Lookup key for a public post.
#[derive(Debug, Clone, Copy)]
pub enum PublishedKey<'k> {
    Slug(&'k str),
    Id(Uuid),
}

pub struct GetPublishedBlog<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> GetPublishedBlog<'a, R> {
    pub async fn execute(&self, key: PublishedKey<'_>) -> anyhow::Result<Option<Blog>> {
        match key {
            PublishedKey::Slug(slug) => self.repo.find_published_by_slug(slug).await,
            PublishedKey::Id(id) => self.repo.find_published_by_id(id).await,
        }
    }
}
