use axum::{Json, Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::auth::AdminAuth;
use super::error::ApiError;
use super::response::{self, Envelope};
use crate::application::use_cases::portfolio::personal_info::{
    GetPersonalInfo, UpdatePersonalInfo,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::portfolio::personal_info::{PersonalInfo, PersonalInfoUpdate, SocialLinks};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SocialLinksDto {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub website: Option<String>,
}

impl From<SocialLinks> for SocialLinksDto {
    fn from(s: SocialLinks) -> Self {
        Self {
            github: s.github,
            linkedin: s.linkedin,
            twitter: s.twitter,
            website: s.website,
        }
    }
}

impl From<SocialLinksDto> for SocialLinks {
    fn from(s: SocialLinksDto) -> Self {
        Self {
            github: s.github,
            linkedin: s.linkedin,
            twitter: s.twitter,
            website: s.website,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoResponse {
    pub id: Uuid,
    pub name: String,
    pub tagline: String,
    pub description: Vec<String>,
    pub profile_image: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub social_links: Option<SocialLinksDto>,
    pub updated_at: DateTime<Utc>,
}

impl From<PersonalInfo> for PersonalInfoResponse {
    fn from(p: PersonalInfo) -> Self {
        Self {
            id: p.id,
            name: p.name,
            tagline: p.tagline,
            description: p.description,
            profile_image: p.profile_image,
            email: p.email,
            phone: p.phone,
            location: p.location,
            social_links: p.social_links.map(Into::into),
            updated_at: p.updated_at,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfoRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub profile_image: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub social_links: Option<SocialLinksDto>,
}

impl From<PersonalInfoRequest> for PersonalInfoUpdate {
    fn from(r: PersonalInfoRequest) -> Self {
        Self {
            name: r.name,
            tagline: r.tagline,
            description: r.description,
            profile_image: r.profile_image,
            email: r.email,
            phone: r.phone,
            location: r.location,
            social_links: r.social_links.map(Into::into),
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/portfolio", get(get_personal_info).put(update_personal_info))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/portfolio", tag = "Portfolio", security(()), responses(
    (status = 200, description = "Envelope with the owner's profile"),
    (status = 404, description = "Envelope with the not-found message")
))]
pub async fn get_personal_info(
    State(ctx): State<AppContext>,
) -> Result<Envelope<PersonalInfoResponse>, ApiError> {
    let repo = ctx.personal_info_repo();
    let uc = GetPersonalInfo {
        repo: repo.as_ref(),
    };
    Ok(match uc.execute().await? {
        Some(info) => response::ok(info.into(), "Personal information retrieved successfully"),
        None => response::not_found("Personal information not found"),
    })
}

#[utoipa::path(put, path = "/api/portfolio", tag = "Portfolio", request_body = PersonalInfoRequest, responses(
    (status = 200, description = "Envelope with the saved profile"),
    (status = 400, body = super::error::ErrorResponse),
    (status = 401, body = super::error::ErrorResponse)
))]
pub async fn update_personal_info(
    State(ctx): State<AppContext>,
    _admin: AdminAuth,
    Json(req): Json<PersonalInfoRequest>,
) -> Result<Envelope<PersonalInfoResponse>, ApiError> {
    let repo = ctx.personal_info_repo();
    let uc = UpdatePersonalInfo {
        repo: repo.as_ref(),
    };
    let info = uc.execute(req.into()).await?;
    Ok(response::ok(
        info.into(),
        "Personal information updated successfully",
    ))
}
