use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum TeamError {
    #[error("Team ID {0:?} not found")]
    TeamNotFound(i32),
    #[error("No team found for join code {0:?}")]
    CodeNotFound(String),
    #[error("Caller already belongs to a team")]
    AlreadyInTeam,
    #[error("Caller does not belong to a team")]
    NotInTeam,
    #[error("Team is archived and cannot be joined")]
    TeamArchived,
    #[error("Team is already at its member capacity")]
    TeamFull,
    #[error("Task ID {0:?} not found")]
    TaskNotFound(i32),
    #[error("Assignee ID {0:?} is not a member of the team")]
    AssigneeNotInTeam(i32),
    #[error("Failed to generate a unique join code after {0:?} attempts")]
    CodeGenerationFailed(u32),
}

impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        match self {
            Self::TeamNotFound(_) => error_response(StatusCode::NOT_FOUND, "Team not found"),
            Self::CodeNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "No team found for that join code")
            }
            Self::AlreadyInTeam => {
                error_response(StatusCode::CONFLICT, "You already belong to a team")
            }
            Self::NotInTeam => error_response(StatusCode::BAD_REQUEST, "You are not in a team"),
            Self::TeamArchived => {
                error_response(StatusCode::CONFLICT, "This team has been archived")
            }
            Self::TeamFull => error_response(StatusCode::CONFLICT, "This team is already full"),
            Self::TaskNotFound(_) => error_response(StatusCode::NOT_FOUND, "Task not found"),
            Self::AssigneeNotInTeam(_) => error_response(
                StatusCode::BAD_REQUEST,
                "The assignee must be a member of the team",
            ),
            Self::CodeGenerationFailed(_) => InternalServerError(self).into_response(),
        }
    }
}
