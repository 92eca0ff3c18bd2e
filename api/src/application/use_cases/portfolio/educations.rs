use std::cmp::Reverse;

use crate::application::ports::education_repository::EducationRepository;
use crate::domain::portfolio::education::Education;

pub struct ListEducations<'a, R: EducationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: EducationRepository + ?Sized> ListEducations<'a, R> {
    /// Most recent first; entries with unreadable dates go last.
    pub async fn execute(&self) -> anyhow::Result<Vec<Education>> {
        let mut items = self.repo.list_all().await?;
        items.sort_by_cached_key(|e| Reverse(e.sort_date()));
        Ok(items)
    }
}
