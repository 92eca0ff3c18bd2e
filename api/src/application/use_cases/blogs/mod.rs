pub mod create_blog;
pub mod delete_blog;
pub mod get_blog;
pub mod list_blogs;
pub mod list_published;
pub mod publish_blog;
pub mod record_view;
pub mod update_blog;

#[cfg(test)]
pub(crate) mod test_support;

use uuid::Uuid;

use crate::application::ports::blog_repository::SlugConflict;
use crate::domain::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    SlugTaken(String),
    #[error(transparent)]
    Invalid(#[from] FieldErrors),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl BlogError {
    pub fn not_found_id(id: Uuid) -> Self {
        BlogError::NotFound(format!("Blog with ID '{id}' not found"))
    }

    pub fn slug_taken(slug: &str) -> Self {
        BlogError::SlugTaken(format!("Blog with slug '{slug}' already exists"))
    }

    /// Maps a failed write, turning a lost slug race into `SlugTaken`.
    pub fn from_write(err: anyhow::Error) -> Self {
        match err.downcast::<SlugConflict>() {
            Ok(SlugConflict(slug)) => BlogError::slug_taken(&slug),
            Err(other) => BlogError::Internal(other),
        }
    }
}
