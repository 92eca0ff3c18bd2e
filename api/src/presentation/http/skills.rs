use axum::{Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::ApiError;
use super::response::{self, Envelope};
use crate::application::use_cases::portfolio::skills::ListSkills;
use crate::bootstrap::app_context::AppContext;
use crate::domain::portfolio::skill::SkillGroup;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroupResponse {
    pub id: Uuid,
    pub category_name: String,
    pub skills: Vec<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SkillGroup> for SkillGroupResponse {
    fn from(s: SkillGroup) -> Self {
        Self {
            id: s.id,
            category_name: s.category_name,
            skills: s.skills,
            display_order: s.display_order,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new().route("/skills", get(list_skills)).with_state(ctx)
}

#[utoipa::path(get, path = "/api/skills", tag = "Portfolio", security(()), responses(
    (status = 200, description = "Envelope with skill groups in display order")
))]
pub async fn list_skills(
    State(ctx): State<AppContext>,
) -> Result<Envelope<Vec<SkillGroupResponse>>, ApiError> {
    let repo = ctx.skill_repo();
    let uc = ListSkills {
        repo: repo.as_ref(),
    };
    let groups = uc.execute().await?;
    Ok(response::ok(
        groups.into_iter().map(SkillGroupResponse::from).collect(),
        "Skills retrieved successfully",
    ))
}
