use chrono::Utc;
use uuid::Uuid;

use super::BlogError;
use crate::application::ports::blog_repository::BlogRepository;
use crate::domain::blogs::blog::{Blog, BlogDraft, BlogStatus, reading_time_minutes};

pub struct CreateBlog<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> CreateBlog<'a, R> {
    pub async fn execute(&self, draft: BlogDraft) -> Result<Blog, BlogError> {
        draft.validate()?;
        if self.repo.slug_exists(&draft.slug).await? {
            return Err(BlogError::slug_taken(&draft.slug));
        }
        let now = Utc::now();
        let status = draft.status.unwrap_or_default();
        let reading_time = draft
            .reading_time
            .unwrap_or_else(|| reading_time_minutes(&draft.content));
        let blog = Blog {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            slug: draft.slug,
            created_at: now,
            updated_at: now,
            excerpt: draft.excerpt,
            featured_image: draft.featured_image,
            reading_time: Some(reading_time),
            view_count: 0,
            status,
            published_at: status.is_publicly_visible().then_some(now),
            is_active: true,
            category: draft.category,
        };
        tracing::info!(slug = %blog.slug, title = %blog.title, "blog_created");
        self.repo.insert(&blog).await.map_err(BlogError::from_write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::blogs::test_support::{InMemoryBlogRepository, blog};

    fn draft(slug: &str) -> BlogDraft {
        BlogDraft {
            title: "First post".into(),
            content: "word ".repeat(450),
            slug: slug.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn creates_draft_with_computed_reading_time() {
        let repo = InMemoryBlogRepository::default();
        let uc = CreateBlog { repo: &repo };
        let created = uc.execute(draft("first")).await.unwrap();
        assert_eq!(created.status, BlogStatus::Draft);
        assert_eq!(created.reading_time, Some(3));
        assert!(created.published_at.is_none());
        assert!(created.is_active);
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn keeps_given_reading_time_and_stamps_published() {
        let repo = InMemoryBlogRepository::default();
        let uc = CreateBlog { repo: &repo };
        let mut d = draft("first");
        d.reading_time = Some(9);
        d.status = Some(BlogStatus::Published);
        let created = uc.execute(d).await.unwrap();
        assert_eq!(created.reading_time, Some(9));
        assert!(created.published_at.is_some());
    }

    #[tokio::test]
    async fn rejects_slug_of_deleted_post() {
        let mut old = blog("taken", BlogStatus::Draft, 3);
        old.is_active = false;
        let repo = InMemoryBlogRepository::with(vec![old]);
        let uc = CreateBlog { repo: &repo };
        let err = uc.execute(draft("taken")).await.unwrap_err();
        assert!(matches!(err, BlogError::SlugTaken(_)));
        assert_eq!(err.to_string(), "Blog with slug 'taken' already exists");
    }

    #[tokio::test]
    async fn concurrent_slug_claim_is_reported_as_taken() {
        let repo = InMemoryBlogRepository {
            stale_slug_checks: true,
            ..InMemoryBlogRepository::with(vec![blog("taken", BlogStatus::Draft, 1)])
        };
        let err = CreateBlog { repo: &repo }.execute(draft("taken")).await.unwrap_err();
        assert!(matches!(err, BlogError::SlugTaken(_)));
        assert_eq!(err.to_string(), "Blog with slug 'taken' already exists");
        assert_eq!(repo.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn rejects_invalid_payload() {
        let repo = InMemoryBlogRepository::default();
        let uc = CreateBlog { repo: &repo };
        let mut d = draft("x");
        d.content = String::new();
        let err = uc.execute(d).await.unwrap_err();
        assert!(matches!(err, BlogError::Invalid(_)));
        assert!(repo.snapshot().is_empty());
    }
}
