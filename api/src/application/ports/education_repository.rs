use async_trait::async_trait;

use crate::domain::portfolio::education::Education;

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn list_all(&self) -> anyhow::Result<Vec<Education>>;
}
