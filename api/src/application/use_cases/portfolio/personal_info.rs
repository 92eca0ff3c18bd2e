use chrono::Utc;

use super::PortfolioError;
use crate::application::ports::personal_info_repository::PersonalInfoRepository;
use crate::domain::portfolio::personal_info::{PersonalInfo, PersonalInfoUpdate};

pub struct GetPersonalInfo<'a, R: PersonalInfoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PersonalInfoRepository + ?Sized> GetPersonalInfo<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Option<PersonalInfo>> {
        self.repo.first().await
    }
}

pub struct UpdatePersonalInfo<'a, R: PersonalInfoRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: PersonalInfoRepository + ?Sized> UpdatePersonalInfo<'a, R> {
    /// Overwrites the single profile record, creating it on first use.
    pub async fn execute(&self, update: PersonalInfoUpdate) -> Result<PersonalInfo, PortfolioError> {
        update.validate()?;
        let now = Utc::now();
        let info = match self.repo.first().await? {
            Some(mut existing) => {
                update.apply_to(&mut existing, now);
                existing
            }
            None => update.into_new(now),
        };
        tracing::info!(id = %info.id, "personal_info_updated");
        Ok(self.repo.upsert(&info).await?)
    }
}
