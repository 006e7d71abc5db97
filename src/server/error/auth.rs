use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use entity::user::UserRole;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Caller lacks required role {0:?}")]
    RoleRequired(UserRole),
    #[error("Caller is not the owner of the requested resource")]
    NotOwner,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Not logged in")
            }
            Self::RoleRequired(role) => {
                tracing::debug!(required_role = ?role, "{}", self);

                error_response(
                    StatusCode::FORBIDDEN,
                    "You do not have permission to perform this action",
                )
            }
            Self::NotOwner => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to modify this resource",
            ),
        }
    }
}
