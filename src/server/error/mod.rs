//! Error types for the Praxis server.
//!
//! Domain-specific error enums built on `thiserror`, aggregated into a single
//! [`Error`] type with `#[from]` conversions. Every error implements
//! `IntoResponse`: domain errors map to actionable 4xx responses, everything
//! else is logged and surfaced as a generic 500 so no internal detail leaks
//! to the caller.

pub mod artifact;
pub mod auth;
pub mod course;
pub mod progress;
pub mod team;
pub mod tool;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        artifact::ArtifactError, auth::AuthError, course::CourseError, progress::ProgressError,
        team::TeamError, tool::ToolError,
    },
};

/// Main error type for the Praxis server.
///
/// Aggregates all domain-specific error types and external library errors so
/// handlers can return a single error type and rely on `?` conversions.
#[derive(Error, Debug)]
pub enum Error {
    /// Authorization error (session, role, ownership, membership).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Course authoring error (missing course, non-dense node orders).
    #[error(transparent)]
    CourseError(#[from] CourseError),
    /// Progression engine error (missing node, invalid stage transition).
    #[error(transparent)]
    ProgressError(#[from] ProgressError),
    /// Artifact lifecycle error (quota, team precondition, missing record).
    #[error(transparent)]
    ArtifactError(#[from] ArtifactError),
    /// Team or task board error (codes, capacity, membership).
    #[error(transparent)]
    TeamError(#[from] TeamError),
    /// Tool catalog or review queue error.
    #[error(transparent)]
    ToolError(#[from] ToolError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::CourseError(err) => err.into_response(),
            Self::ProgressError(err) => err.into_response(),
            Self::ArtifactError(err) => err.into_response(),
            Self::TeamError(err) => err.into_response(),
            Self::ToolError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error server-side and returns a generic message to the
/// client so implementation details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds the standard JSON error body for a given status code and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
