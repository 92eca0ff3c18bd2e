use async_trait::async_trait;

use crate::domain::portfolio::project::Project;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_active_by_display_order_desc(&self) -> anyhow::Result<Vec<Project>>;
}
