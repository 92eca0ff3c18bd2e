use axum::{Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::ApiError;
use super::response::{self, Envelope};
use crate::application::use_cases::portfolio::educations::ListEducations;
use crate::bootstrap::app_context::AppContext;
use crate::domain::portfolio::education::Education;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationResponse {
    pub id: Uuid,
    pub degree: String,
    pub field_of_study: String,
    pub institution_name: String,
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub is_current: bool,
    pub description: Option<String>,
    pub institution_logo: Option<String>,
    pub institution_website: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Education> for EducationResponse {
    fn from(e: Education) -> Self {
        Self {
            id: e.id,
            degree: e.degree,
            field_of_study: e.field_of_study,
            institution_name: e.institution_name,
            location: e.location,
            start_date: e.start_date,
            end_date: e.end_date,
            is_current: e.is_current,
            description: e.description,
            institution_logo: e.institution_logo,
            institution_website: e.institution_website,
            display_order: e.display_order,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/educations", get(list_educations))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/educations", tag = "Portfolio", security(()), responses(
    (status = 200, description = "Envelope with educations, most recent first")
))]
pub async fn list_educations(
    State(ctx): State<AppContext>,
) -> Result<Envelope<Vec<EducationResponse>>, ApiError> {
    let repo = ctx.education_repo();
    let uc = ListEducations {
        repo: repo.as_ref(),
    };
    let items = uc.execute().await?;
    Ok(response::ok(
        items.into_iter().map(EducationResponse::from).collect(),
        "Educations retrieved successfully",
    ))
}
