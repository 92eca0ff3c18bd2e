use async_trait::async_trait;

use crate::domain::portfolio::personal_info::PersonalInfo;

#[async_trait]
pub trait PersonalInfoRepository: Send + Sync {
    async fn first(&self) -> anyhow::Result<Option<PersonalInfo>>;
    async fn upsert(&self, info: &PersonalInfo) -> anyhow::Result<PersonalInfo>;
}
