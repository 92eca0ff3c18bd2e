use chrono::Utc;
use uuid::Uuid;

use super::BlogError;
use crate::application::ports::blog_repository::BlogRepository;
use crate::domain::blogs::blog::{Blog, BlogDraft, reading_time_minutes};

pub struct UpdateBlog<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> UpdateBlog<'a, R> {
    /// Replaces the editable fields of an active post. Status and view count
    /// are left alone; publishing has its own operations.
    pub async fn execute(&self, id: Uuid, draft: BlogDraft) -> Result<Blog, BlogError> {
        draft.validate()?;
        let mut blog = self
            .repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| BlogError::not_found_id(id))?;

        if draft.slug != blog.slug && self.repo.slug_exists(&draft.slug).await? {
            return Err(BlogError::slug_taken(&draft.slug));
        }

        if draft.content != blog.content {
            blog.reading_time = Some(reading_time_minutes(&draft.content));
        } else if let Some(minutes) = draft.reading_time {
            blog.reading_time = Some(minutes);
        }
        blog.title = draft.title;
        blog.content = draft.content;
        blog.slug = draft.slug;
        blog.excerpt = draft.excerpt;
        blog.featured_image = draft.featured_image;
        blog.category = draft.category;
        blog.updated_at = Utc::now();

        tracing::info!(blog_id = %id, "blog_updated");
        self.repo.save(&blog).await.map_err(BlogError::from_write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::blogs::test_support::{InMemoryBlogRepository, blog};
    use crate::domain::blogs::blog::{BlogCategory, BlogStatus};

    fn draft_from(b: &Blog) -> BlogDraft {
        BlogDraft {
            title: b.title.clone(),
            content: b.content.clone(),
            slug: b.slug.clone(),
            excerpt: b.excerpt.clone(),
            featured_image: b.featured_image.clone(),
            reading_time: None,
            status: None,
            category: b.category,
        }
    }

    #[tokio::test]
    async fn recalculates_reading_time_when_content_changes() {
        let existing = blog("post", BlogStatus::Published, 1);
        let id = existing.id;
        let repo = InMemoryBlogRepository::with(vec![existing.clone()]);
        let mut d = draft_from(&existing);
        d.content = "word ".repeat(1000);
        d.reading_time = Some(42);
        d.category = Some(BlogCategory::Career);
        let updated = UpdateBlog { repo: &repo }.execute(id, d).await.unwrap();
        assert_eq!(updated.reading_time, Some(5));
        assert_eq!(updated.category, Some(BlogCategory::Career));
        assert_eq!(updated.status, BlogStatus::Published);
    }

    #[tokio::test]
    async fn takes_reading_time_from_payload_when_content_is_unchanged() {
        let existing = blog("post", BlogStatus::Draft, 1);
        let id = existing.id;
        let repo = InMemoryBlogRepository::with(vec![existing.clone()]);
        let mut d = draft_from(&existing);
        d.reading_time = Some(7);
        let updated = UpdateBlog { repo: &repo }.execute(id, d).await.unwrap();
        assert_eq!(updated.reading_time, Some(7));
    }

    #[tokio::test]
    async fn refuses_slug_owned_by_another_post() {
        let a = blog("a", BlogStatus::Draft, 1);
        let b = blog("b", BlogStatus::Draft, 2);
        let repo = InMemoryBlogRepository::with(vec![a.clone(), b]);
        let mut d = draft_from(&a);
        d.slug = "b".into();
        let err = UpdateBlog { repo: &repo }.execute(a.id, d).await.unwrap_err();
        assert!(matches!(err, BlogError::SlugTaken(_)));
    }

    #[tokio::test]
    async fn missing_post_is_not_found() {
        let repo = InMemoryBlogRepository::default();
        let d = draft_from(&blog("x", BlogStatus::Draft, 0));
        let id = Uuid::new_v4();
        let err = UpdateBlog { repo: &repo }.execute(id, d).await.unwrap_err();
        assert_eq!(err.to_string(), format!("Blog with ID '{id}' not found"));
    }
}
