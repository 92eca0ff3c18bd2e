use axum::{Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::ApiError;
use super::response::{self, Envelope};
use crate::application::use_cases::portfolio::experiences::ListExperiences;
use crate::bootstrap::app_context::AppContext;
use crate::domain::portfolio::experience::Experience;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceResponse {
    pub id: Uuid,
    pub company_name: String,
    pub position: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
    pub achievements: Vec<String>,
    pub company_logo: Option<String>,
    pub company_website: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Experience> for ExperienceResponse {
    fn from(e: Experience) -> Self {
        Self {
            id: e.id,
            company_name: e.company_name,
            position: e.position,
            location: e.location,
            start_date: e.start_date,
            end_date: e.end_date,
            is_current: e.is_current,
            description: e.description,
            technologies: e.technologies,
            achievements: e.achievements,
            company_logo: e.company_logo,
            company_website: e.company_website,
            display_order: e.display_order,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/experiences", get(list_experiences))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/experiences", tag = "Portfolio", security(()), responses(
    (status = 200, description = "Envelope with work experiences")
))]
pub async fn list_experiences(
    State(ctx): State<AppContext>,
) -> Result<Envelope<Vec<ExperienceResponse>>, ApiError> {
    let repo = ctx.experience_repo();
    let uc = ListExperiences {
        repo: repo.as_ref(),
    };
    let items = uc.execute().await?;
    Ok(response::ok(
        items.into_iter().map(ExperienceResponse::from).collect(),
        "Experiences retrieved successfully",
    ))
}
