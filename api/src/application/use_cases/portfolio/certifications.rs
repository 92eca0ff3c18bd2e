use std::cmp::Reverse;

use crate::application::ports::certification_repository::CertificationRepository;
use crate::domain::portfolio::certification::Certification;

pub struct ListCertifications<'a, R: CertificationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: CertificationRepository + ?Sized> ListCertifications<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Certification>> {
        let mut items = self.repo.list_all().await?;
        items.sort_by_cached_key(|c| Reverse(c.issued_on()));
        Ok(items)
    }
}
