use crate::application::ports::experience_repository::ExperienceRepository;
use crate::domain::portfolio::experience::Experience;

pub struct ListExperiences<'a, R: ExperienceRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ExperienceRepository + ?Sized> ListExperiences<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Experience>> {
        self.repo.list_by_display_order_desc().await
    }
}
