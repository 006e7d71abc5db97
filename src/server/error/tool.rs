use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Tool submission ID {0:?} not found")]
    SubmissionNotFound(i32),
    #[error("Tool submission ID {0:?} has already been approved")]
    AlreadyApproved(i32),
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        match self {
            Self::SubmissionNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Submission not found")
            }
            Self::AlreadyApproved(_) => error_response(
                StatusCode::CONFLICT,
                "This submission has already been approved",
            ),
        }
    }
}
