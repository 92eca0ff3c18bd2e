use async_trait::async_trait;

use crate::domain::portfolio::skill::SkillGroup;

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn list_by_display_order(&self) -> anyhow::Result<Vec<SkillGroup>>;
}
