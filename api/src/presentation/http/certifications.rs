use axum::{Router, extract::State, routing::get};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::error::ApiError;
use super::response::{self, Envelope};
use crate::application::use_cases::portfolio::certifications::ListCertifications;
use crate::bootstrap::app_context::AppContext;
use crate::domain::portfolio::certification::Certification;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificationResponse {
    pub id: Uuid,
    pub certification_name: String,
    pub issuing_organization: String,
    pub issue_date: Option<String>,
    pub expiration_date: Option<String>,
    pub does_not_expire: bool,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub description: Option<String>,
    pub organization_logo: Option<String>,
    pub organization_website: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Certification> for CertificationResponse {
    fn from(c: Certification) -> Self {
        Self {
            id: c.id,
            certification_name: c.certification_name,
            issuing_organization: c.issuing_organization,
            issue_date: c.issue_date,
            expiration_date: c.expiration_date,
            does_not_expire: c.does_not_expire,
            credential_id: c.credential_id,
            credential_url: c.credential_url,
            description: c.description,
            organization_logo: c.organization_logo,
            organization_website: c.organization_website,
            display_order: c.display_order,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/certifications", get(list_certifications))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/certifications", tag = "Portfolio", security(()), responses(
    (status = 200, description = "Envelope with certifications, newest issue first")
))]
pub async fn list_certifications(
    State(ctx): State<AppContext>,
) -> Result<Envelope<Vec<CertificationResponse>>, ApiError> {
    let repo = ctx.certification_repo();
    let uc = ListCertifications {
        repo: repo.as_ref(),
    };
    let items = uc.execute().await?;
    Ok(response::ok(
        items.into_iter().map(CertificationResponse::from).collect(),
        "Certifications retrieved successfully",
    ))
}
