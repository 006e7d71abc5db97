use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::user_node_progress::NodeStatus;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("Course node ID {0:?} not found")]
    NodeNotFound(i32),
    #[error("Stage is locked and cannot be started yet")]
    StageLocked,
    #[error("Stage cannot be started from status {0:?}")]
    StageNotStartable(NodeStatus),
}

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        match self {
            Self::NodeNotFound(_) => error_response(StatusCode::NOT_FOUND, "Stage not found"),
            Self::StageLocked => error_response(
                StatusCode::CONFLICT,
                "This stage is locked; complete the previous stage first",
            ),
            Self::StageNotStartable(NodeStatus::Completed) => error_response(
                StatusCode::CONFLICT,
                "This stage is already completed and cannot be restarted",
            ),
            Self::StageNotStartable(_) => error_response(
                StatusCode::CONFLICT,
                "This stage is not available to start",
            ),
        }
    }
}
