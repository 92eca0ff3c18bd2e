use crate::application::ports::blog_repository::BlogRepository;
use crate::domain::blogs::blog::Blog;

pub struct ListBlogs<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> ListBlogs<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Blog>> {
        self.repo.list_active().await
    }
}
