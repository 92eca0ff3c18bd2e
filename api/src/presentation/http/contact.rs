use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::ApiError;
use super::response::{self, Envelope};
use crate::application::use_cases::contact::submit_contact::SubmitContact;
use crate::bootstrap::app_context::AppContext;
use crate::domain::contact::ContactMessage;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub subject: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl From<ContactRequest> for ContactMessage {
    fn from(r: ContactRequest) -> Self {
        Self {
            name: r.name,
            email: r.email,
            subject: r.subject,
            message: r.message,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub message: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/contact", post(submit_contact))
        .route("/contact/", post(submit_contact))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/api/contact", tag = "Contact", security(()), request_body = ContactRequest, responses(
    (status = 200, description = "Envelope with the acknowledgement message"),
    (status = 400, body = super::error::ErrorResponse),
    (status = 429, description = "Rate limit exceeded"),
    (status = 500, body = super::error::ErrorResponse)
))]
pub async fn submit_contact(
    State(ctx): State<AppContext>,
    Json(req): Json<ContactRequest>,
) -> Result<Envelope<ContactResponse>, ApiError> {
    let repo = ctx.personal_info_repo();
    let sender = ctx.email_sender();
    let uc = SubmitContact {
        personal_info: repo.as_ref(),
        sender: sender.as_deref(),
        settings: ctx.contact_settings(),
    };
    let message = uc.execute(&req.into()).await?;
    Ok(response::ok(
        ContactResponse {
            message: message.to_string(),
        },
        message,
    ))
}
