use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;
use crate::server::service::artifact::MAX_SCHOOL_PERSONAL_ARTIFACTS;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Artifact ID {0:?} not found")]
    NotFound(i32),
    #[error("Artifact quota reached: {0:?} school/personal artifacts already exist")]
    QuotaExceeded(u64),
    #[error("TEAM artifacts require the caller to belong to a team")]
    TeamRequired,
    #[error("Feedback text is required when requesting improvement")]
    FeedbackRequired,
}

impl IntoResponse for ArtifactError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Artifact not found"),
            Self::QuotaExceeded(_) => error_response(
                StatusCode::BAD_REQUEST,
                format!(
                    "You can have at most {} school and personal artifacts",
                    MAX_SCHOOL_PERSONAL_ARTIFACTS
                ),
            ),
            Self::TeamRequired => error_response(
                StatusCode::BAD_REQUEST,
                "Join a team before creating a team artifact",
            ),
            Self::FeedbackRequired => error_response(
                StatusCode::BAD_REQUEST,
                "Feedback is required when requesting improvement",
            ),
        }
    }
}
