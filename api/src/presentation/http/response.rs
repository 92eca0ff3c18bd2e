use axum::{Json, http::StatusCode};
use chrono::Utc;
use serde::Serialize;

pub fn timestamp_now() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Envelope used by the public endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: timestamp_now(),
            path: None,
            status: None,
        }
    }

    pub fn error(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: timestamp_now(),
            path: None,
            status: Some(status.as_u16()),
        }
    }
}

pub type Envelope<T> = (StatusCode, Json<ApiResponse<T>>);

pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> Envelope<T> {
    (StatusCode::OK, Json(ApiResponse::success(data, message)))
}

pub fn not_found<T: Serialize>(message: impl Into<String>) -> Envelope<T> {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error(message, StatusCode::NOT_FOUND)),
    )
}
