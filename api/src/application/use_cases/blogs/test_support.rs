use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::application::ports::blog_repository::{BlogRepository, SlugConflict};
use crate::domain::blogs::blog::{Blog, BlogCategory, BlogStatus};

#[derive(Default)]
pub struct InMemoryBlogRepository {
    pub blogs: Mutex<Vec<Blog>>,
    /// Makes `slug_exists` answer false, as a check that lost a race would.
    pub stale_slug_checks: bool,
}

impl InMemoryBlogRepository {
    pub fn with(blogs: Vec<Blog>) -> Self {
        Self {
            blogs: Mutex::new(blogs),
            stale_slug_checks: false,
        }
    }

    pub fn snapshot(&self) -> Vec<Blog> {
        self.blogs.lock().unwrap().clone()
    }

    fn check_unique(blogs: &[Blog], blog: &Blog) -> anyhow::Result<()> {
        if blogs.iter().any(|b| b.id != blog.id && b.slug == blog.slug) {
            return Err(SlugConflict(blog.slug.clone()).into());
        }
        Ok(())
    }
}

pub fn blog(slug: &str, status: BlogStatus, age_days: i64) -> Blog {
    let at = Utc::now() - Duration::days(age_days);
    Blog {
        id: Uuid::new_v4(),
        title: format!("Title {slug}"),
        content: "some words here".into(),
        slug: slug.into(),
        created_at: at,
        updated_at: at,
        excerpt: None,
        featured_image: None,
        reading_time: Some(1),
        view_count: 0,
        status,
        published_at: (status == BlogStatus::Published).then_some(at),
        is_active: true,
        category: None,
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn list_active(&self) -> anyhow::Result<Vec<Blog>> {
        let mut out: Vec<Blog> = self.snapshot().into_iter().filter(|b| b.is_active).collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn find_active_by_id(&self, id: Uuid) -> anyhow::Result<Option<Blog>> {
        Ok(self.snapshot().into_iter().find(|b| b.id == id && b.is_active))
    }

    async fn find_active_by_slug(&self, slug: &str) -> anyhow::Result<Option<Blog>> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|b| b.slug == slug && b.is_active))
    }

    async fn slug_exists(&self, slug: &str) -> anyhow::Result<bool> {
        Ok(!self.stale_slug_checks && self.snapshot().iter().any(|b| b.slug == slug))
    }

    async fn insert(&self, blog: &Blog) -> anyhow::Result<Blog> {
        let mut guard = self.blogs.lock().unwrap();
        Self::check_unique(&guard, blog)?;
        guard.push(blog.clone());
        Ok(blog.clone())
    }

    async fn save(&self, blog: &Blog) -> anyhow::Result<Blog> {
        let mut guard = self.blogs.lock().unwrap();
        Self::check_unique(&guard, blog)?;
        match guard.iter_mut().find(|b| b.id == blog.id) {
            Some(slot) => *slot = blog.clone(),
            None => anyhow::bail!("no blog {}", blog.id),
        }
        Ok(blog.clone())
    }

    async fn list_published(&self, category: Option<BlogCategory>) -> anyhow::Result<Vec<Blog>> {
        let mut out: Vec<Blog> = self
            .snapshot()
            .into_iter()
            .filter(|b| b.is_publicly_visible())
            .filter(|b| category.is_none() || b.category == category)
            .collect();
        out.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(out)
    }

    async fn find_published_by_slug(&self, slug: &str) -> anyhow::Result<Option<Blog>> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|b| b.slug == slug && b.is_publicly_visible()))
    }

    async fn find_published_by_id(&self, id: Uuid) -> anyhow::Result<Option<Blog>> {
        Ok(self
            .snapshot()
            .into_iter()
            .find(|b| b.id == id && b.is_publicly_visible()))
    }

    async fn increment_views(&self, id: Uuid) -> anyhow::Result<Option<Blog>> {
        let mut guard = self.blogs.lock().unwrap();
        Ok(guard
            .iter_mut()
            .find(|b| b.id == id && b.is_active)
            .map(|b| {
                b.view_count += 1;
                b.clone()
            }))
    }
}
