use async_trait::async_trait;

use crate::domain::portfolio::experience::Experience;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn list_by_display_order_desc(&self) -> anyhow::Result<Vec<Experience>>;
}
