use chrono::Utc;
use uuid::Uuid;

use super::BlogError;
use crate::application::ports::blog_repository::BlogRepository;

pub struct DeleteBlog<'a, R: BlogRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: BlogRepository + ?Sized> DeleteBlog<'a, R> {
    /// Soft delete; the row and its slug stay in storage.
    pub async fn execute(&self, id: Uuid) -> Result<(), BlogError> {
        let mut blog = self
            .repo
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| BlogError::not_found_id(id))?;
        blog.is_active = false;
        blog.updated_at = Utc::now();
        self.repo.save(&blog).await?;
        tracing::info!(blog_id = %id, "blog_deleted");
        Ok(())
    }
}
