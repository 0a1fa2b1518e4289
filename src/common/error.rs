use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

/// Failures the server itself answers with; everything else is relayed.
#[derive(Debug, Serialize)]
pub enum AppError {
    UpstreamUnavailable(String),
}

impl AppError {
    fn code(&self) -> u16 {
        match self {
            // The relay reports an unreachable backend as a plain server error.
            AppError::UpstreamUnavailable(_) => 500,
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            AppError::UpstreamUnavailable(_) => "Failed to connect to backend server",
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::UpstreamUnavailable(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(serde_json::json!({
            "error": self.summary(),
            "details": self.message(),
        }));
        (status_code, body).into_response()
    }
}
