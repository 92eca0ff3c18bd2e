use uuid::Uuid;

use crate::application::ports::blog_repository::BlogRepository;
use crate::domain::blogs::blog::Blog;

pub struct GetBlogBySlug<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> GetBlogBySlug<'a, R> {
    pub async fn execute(&self, slug: &str) -> anyhow::Result<Option<Blog>> {
        self.repo.find_active_by_slug(slug).await
    }
}

pub struct GetBlogById<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> GetBlogById<'a, R> {
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<Option<Blog>> {
        self.repo.find_active_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::blogs::test_support::{InMemoryBlogRepository, blog};
    use crate::domain::blogs::blog::BlogStatus;

    #[tokio::test]
    async fn drafts_are_visible_to_admin_but_deleted_posts_are_not() {
        let draft = blog("draft", BlogStatus::Draft, 0);
        let mut deleted = blog("deleted", BlogStatus::Published, 0);
        deleted.is_active = false;
        let (draft_id, deleted_id) = (draft.id, deleted.id);
        let repo = InMemoryBlogRepository::with(vec![draft, deleted]);

        let by_slug = GetBlogBySlug { repo: &repo };
        assert!(by_slug.execute("draft").await.unwrap().is_some());
        assert!(by_slug.execute("deleted").await.unwrap().is_none());

        let by_id = GetBlogById { repo: &repo };
        assert!(by_id.execute(draft_id).await.unwrap().is_some());
        assert!(by_id.execute(deleted_id).await.unwrap().is_none());
    }
}
