use crate::application::ports::skill_repository::SkillRepository;
use crate::domain::portfolio::skill::SkillGroup;

pub struct ListSkills<'a, R: SkillRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: SkillRepository + ?Sized> ListSkills<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<SkillGroup>> {
        self.repo.list_by_display_order().await
    }
}
