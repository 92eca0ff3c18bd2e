use crate::application::ports::project_repository::ProjectRepository;
use crate::domain::portfolio::project::Project;

pub struct ListProjects<'a, R: ProjectRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProjectRepository + ?Sized> ListProjects<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<Project>> {
        self.repo.list_active_by_display_order_desc().await
    }
}
