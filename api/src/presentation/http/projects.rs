use axum::{Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::ApiError;
use super::response::{self, Envelope};
use crate::application::use_cases::portfolio::projects::ListProjects;
use crate::bootstrap::app_context::AppContext;
use crate::domain::portfolio::project::Project;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub featured_image: String,
    pub technologies: Vec<String>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            short_description: p.short_description,
            featured_image: p.featured_image,
            technologies: p.technologies,
            project_url: p.project_url,
            github_url: p.github_url,
            start_date: p.start_date,
            end_date: p.end_date,
            is_active: p.is_active,
            display_order: p.display_order,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/projects", get(list_projects))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/projects", tag = "Portfolio", security(()), responses(
    (status = 200, description = "Envelope with active projects, highest display order first")
))]
pub async fn list_projects(
    State(ctx): State<AppContext>,
) -> Result<Envelope<Vec<ProjectResponse>>, ApiError> {
    let repo = ctx.project_repo();
    let uc = ListProjects {
        repo: repo.as_ref(),
    };
    let projects = uc.execute().await?;
    Ok(response::ok(
        projects.into_iter().map(ProjectResponse::from).collect(),
        "Projects retrieved successfully",
    ))
}
