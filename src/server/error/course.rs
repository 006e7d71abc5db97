use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("Course ID {0:?} not found")]
    CourseNotFound(i32),
    #[error("A course requires at least one node")]
    NoNodes,
    // Dense orders are validated at authoring time so the order + 1 unlock
    // lookup cannot dead-end at runtime.
    #[error("Course node orders must be dense starting at 1: expected {expected:?}, found {found:?}")]
    NodeOrderNotDense { expected: i32, found: i32 },
}

impl IntoResponse for CourseError {
    fn into_response(self) -> Response {
        match self {
            Self::CourseNotFound(_) => error_response(StatusCode::NOT_FOUND, "Course not found"),
            Self::NoNodes => {
                error_response(StatusCode::BAD_REQUEST, "A course requires at least one node")
            }
            Self::NodeOrderNotDense { expected, found } => error_response(
                StatusCode::BAD_REQUEST,
                format!(
                    "Course node orders must be a dense sequence starting at 1 \
                    (expected {}, found {})",
                    expected, found
                ),
            ),
        }
    }
}
