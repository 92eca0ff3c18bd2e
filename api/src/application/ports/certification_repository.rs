use async_trait::async_trait;

use crate::domain::portfolio::certification::Certification;

#[async_trait]
pub trait CertificationRepository: Send + Sync {
    async fn list_all(&self) -> anyhow::Result<Vec<Certification>>;
}
