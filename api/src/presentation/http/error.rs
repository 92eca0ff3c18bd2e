use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use super::response::timestamp_now;
use crate::application::use_cases::blogs::BlogError;
use crate::application::use_cases::contact::submit_contact::ContactError;
use crate::application::use_cases::portfolio::PortfolioError;
use crate::domain::validation::FieldErrors;

pub const BASIC_REALM: &str = r#"Basic realm="Blog Admin API""#;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BlogNotFound(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    SlugTaken(String),
    #[error(transparent)]
    Validation(FieldErrors),
    #[error("{0}")]
    BadRequest(String),
    #[error("Failed to send message. Please try again later.")]
    EmailDelivery,
    #[error("Invalid or missing admin credentials")]
    Unauthorized,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            ApiError::BlogNotFound(m) => (StatusCode::NOT_FOUND, "Blog Not Found", m.clone()),
            ApiError::NotFound(m) => (StatusCode::NOT_FOUND, "Not Found", m.clone()),
            ApiError::SlugTaken(m) => (StatusCode::CONFLICT, "Blog Slug Already Exists", m.clone()),
            ApiError::Validation(e) => (StatusCode::BAD_REQUEST, "Validation Error", e.to_string()),
            ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, "Bad Request", m.clone()),
            ApiError::EmailDelivery => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Email Sending Failed",
                self.to_string(),
            ),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Authentication Failed",
                self.to_string(),
            ),
            ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An unexpected error occurred".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(e) = &self {
            tracing::error!(error = ?e, "unhandled_error");
        }
        let (status, error, message) = self.parts();
        let body = ErrorResponse {
            timestamp: timestamp_now(),
            status: status.as_u16(),
            error: error.to_string(),
            message,
        };
        let mut resp = (status, Json(body)).into_response();
        if matches!(self, ApiError::Unauthorized) {
            resp.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(BASIC_REALM),
            );
        }
        resp
    }
}

impl From<BlogError> for ApiError {
    fn from(e: BlogError) -> Self {
        match e {
            BlogError::NotFound(m) => ApiError::BlogNotFound(m),
            BlogError::SlugTaken(m) => ApiError::SlugTaken(m),
            BlogError::Invalid(errs) => ApiError::Validation(errs),
            BlogError::Internal(e) => ApiError::Internal(e),
        }
    }
}

impl From<PortfolioError> for ApiError {
    fn from(e: PortfolioError) -> Self {
        match e {
            PortfolioError::Invalid(errs) => ApiError::Validation(errs),
            PortfolioError::Internal(e) => ApiError::Internal(e),
        }
    }
}

impl From<ContactError> for ApiError {
    fn from(e: ContactError) -> Self {
        match e {
            ContactError::Invalid(errs) => ApiError::Validation(errs),
            ContactError::Delivery(_) => ApiError::EmailDelivery,
            ContactError::Internal(e) => ApiError::Internal(e),
        }
    }
}
