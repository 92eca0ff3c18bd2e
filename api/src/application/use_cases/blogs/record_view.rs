use uuid::Uuid;

use crate::application::ports::blog_repository::BlogRepository;
use crate::domain::blogs::blog::Blog;

pub struct RecordBlogView<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> RecordBlogView<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Blog>> {
        let blog = self.repo.increment_views(id).await?;
        if let Some(b) = &blog {
            tracing::debug!(blog_id = %id, views = b.view_count, "blog_view_recorded");
        }
        Ok(blog)
    }
}

pub struct GetBlogViews<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> GetBlogViews<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<i64>> {
        Ok(self.repo.find_active_by_id(id).await?.map(|b| b.view_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::blogs::test_support::{InMemoryBlogRepository, blog};
    use crate::domain::blogs::blog::BlogStatus;

    #[tokio::test]
    async fn counts_views() {
        let b = blog("post", BlogStatus::Published, 0);
        let id = b.id;
        let repo = InMemoryBlogRepository::with(vec![b]);
        let record = RecordBlogView { repo: &repo };
        record.execute(id).await.unwrap();
        let after = record.execute(id).await.unwrap().unwrap();
        assert_eq!(after.view_count, 2);
        assert_eq!(GetBlogViews { repo: &repo }.execute(id).await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn unknown_post_has_no_views() {
        let repo = InMemoryBlogRepository::default();
        let id = Uuid::new_v4();
        assert!(RecordBlogView { repo: &repo }.execute(id).await.unwrap().is_none());
        assert_eq!(GetBlogViews { repo: &repo }.execute(id).await.unwrap(), None);
    }
}
