use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        tool::{
            ReviewSubmissionDto, SubmitToolDto, ToolDto, ToolSearchDto, ToolSubmissionDto,
        },
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::tool::ToolService,
    },
};

pub static TOOL_TAG: &str = "tool";

/// Searches the published tool catalog.
#[utoipa::path(
    get,
    path = "/api/tools",
    tag = TOOL_TAG,
    params(ToolSearchDto),
    responses(
        (status = 200, description = "Matching tools", body = Vec<ToolDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_tools(
    State(state): State<AppState>,
    session: Session,
    Query(search): Query<ToolSearchDto>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let tool_service = ToolService::new(&state.db);

    let tools = tool_service.search_tools(search).await?;
    let dtos: Vec<ToolDto> = tools.into_iter().map(ToolDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Submits a community tool for review.
#[utoipa::path(
    post,
    path = "/api/tools/submissions",
    tag = TOOL_TAG,
    request_body = SubmitToolDto,
    responses(
        (status = 201, description = "Submission filed", body = ToolSubmissionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_tool(
    State(state): State<AppState>,
    session: Session,
    Json(submit): Json<SubmitToolDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tool_service = ToolService::new(&state.db);

    let submission = tool_service.submit_tool(&user, submit).await?;

    Ok((StatusCode::CREATED, Json(ToolSubmissionDto::from(submission))))
}

/// Lists submissions awaiting review, oldest first. Mentor or admin only.
#[utoipa::path(
    get,
    path = "/api/tools/submissions",
    tag = TOOL_TAG,
    responses(
        (status = 200, description = "Pending submissions", body = Vec<ToolSubmissionDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a mentor or admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pending_submissions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tool_service = ToolService::new(&state.db);

    let submissions = tool_service.list_pending_submissions(&user).await?;
    let dtos: Vec<ToolSubmissionDto> = submissions
        .into_iter()
        .map(ToolSubmissionDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Approves or rejects a pending submission. Mentor or admin only.
///
/// Approval publishes a COMMUNITY catalog tool; rejection records notes and
/// keeps the submission pending for revision.
#[utoipa::path(
    put,
    path = "/api/tools/submissions/{submission_id}/review",
    tag = TOOL_TAG,
    params(
        ("submission_id" = i32, Path, description = "Submission ID")
    ),
    request_body = ReviewSubmissionDto,
    responses(
        (status = 200, description = "Decision applied", body = ToolSubmissionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a mentor or admin", body = ErrorDto),
        (status = 404, description = "Submission not found", body = ErrorDto),
        (status = 409, description = "Submission already approved", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_submission(
    State(state): State<AppState>,
    session: Session,
    Path(submission_id): Path<i32>,
    Json(review): Json<ReviewSubmissionDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let tool_service = ToolService::new(&state.db);

    let submission = tool_service
        .review_submission(&user, submission_id, review)
        .await?;

    Ok((StatusCode::OK, Json(ToolSubmissionDto::from(submission))))
}
