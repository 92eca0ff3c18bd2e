use chrono::Utc;
use uuid::Uuid;

use super::BlogError;
use crate::application::ports::blog_repository::BlogRepository;
use crate::domain::blogs::blog::Blog;

pub struct PublishBlog<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> PublishBlog<'a, R> {
    pub async fn execute(&self, id: Uuid) -> Result<Blog, BlogError> {
        let mut blog = self
            .repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| BlogError::not_found_id(id))?;
        let now = Utc::now();
        blog.publish(now);
        blog.updated_at = now;
        tracing::info!(blog_id = %id, "blog_published");
        Ok(self.repo.save(&blog).await?)
    }
}

pub struct UnpublishBlog<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> UnpublishBlog<'a, R> {
    pub async fn execute(&self, id: Uuid) -> Result<Blog, BlogError> {
        let mut blog = self
            .repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| BlogError::not_found_id(id))?;
        blog.unpublish();
        blog.updated_at = Utc::now();
        tracing::info!(blog_id = %id, "blog_unpublished");
        Ok(self.repo.save(&blog).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::blogs::test_support::{InMemoryBlogRepository, blog};
    use crate::domain::blogs::blog::BlogStatus;

    #[tokio::test]
    async fn publish_then_unpublish() {
        let b = blog("post", BlogStatus::Draft, 0);
        let id = b.id;
        let repo = InMemoryBlogRepository::with(vec![b]);

        let published = PublishBlog { repo: &repo }.execute(id).await.unwrap();
        assert_eq!(published.status, BlogStatus::Published);
        assert!(published.published_at.is_some());

        let draft = UnpublishBlog { repo: &repo }.execute(id).await.unwrap();
        assert_eq!(draft.status, BlogStatus::Draft);
        assert!(draft.published_at.is_none());
        assert_eq!(repo.snapshot()[0].status, BlogStatus::Draft);
    }

    #[tokio::test]
    async fn deleted_post_cannot_be_published() {
        let mut b = blog("post", BlogStatus::Draft, 0);
        b.is_active = false;
        let id = b.id;
        let repo = InMemoryBlogRepository::with(vec![b]);
        let err = PublishBlog { repo: &repo }.execute(id).await.unwrap_err();
        assert!(matches!(err, BlogError::NotFound(_)));
    }
}
