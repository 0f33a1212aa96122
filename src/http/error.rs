//! Per-request failures and their HTTP responses.
//!
//! Every variant ends the request it occurred in and nothing else. None of them can leave
//! the store half-written: the append is the last step of a create.

use crate::user_actor::UserError;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ApiError {
    /// Verb other than GET or POST on `/users`.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// The request body could not be read off the connection.
    #[error("Error reading request body: {0}")]
    BodyRead(#[source] BytesRejection),

    /// The body is not JSON, or not JSON shaped like a create request.
    #[error("Error parsing JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    /// The user store failed to answer (503) or refused the record (422).
    /// `User` accepts every payload, so 422 is only reachable with a store that rejects.
    #[error(transparent)]
    Store(#[from] UserError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BodyRead(_) | ApiError::MalformedJson(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(UserError::Rejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(UserError::StoreUnavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Plain-text body sent to the client. Detail stays in the logs.
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => "Method not allowed",
            ApiError::BodyRead(_) => "Error reading request body",
            ApiError::MalformedJson(_) => "Error parsing JSON",
            ApiError::Store(UserError::Rejected(_)) => "User rejected",
            ApiError::Store(UserError::StoreUnavailable(_)) => "User store unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        (status, self.message()).into_response()
    }
}
