use axum::http::StatusCode;
use thiserror::Error;

/// The single error every service call resolves to.
///
/// `Display` is the human-readable message shown to the operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error(
        "Unable to connect to the server. Please check if the backend server is running on {base_url}"
    )]
    Unreachable { base_url: String },
    #[error("Server Error: {status} - Http failure response for {url}: {status} {reason}")]
    Status {
        status: u16,
        url: String,
        reason: String,
    },
    #[error("Client Error: {0}")]
    Client(String),
}

impl ServiceError {
    pub fn from_status(status: u16, url: &str) -> Self {
        let reason = StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("Unknown Error");
        ServiceError::Status {
            status,
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// HTTP status behind the failure, `0` when no response was received.
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::Status { status, .. } => *status,
            ServiceError::Unreachable { .. } | ServiceError::Client(_) => 0,
        }
    }
}
