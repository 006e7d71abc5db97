use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        course::CourseNodeDto,
        progress::{CompletionResultDto, NodeProgressDto, OverrideNodeStatusDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::progression::ProgressionService,
    },
};

pub static PROGRESS_TAG: &str = "progress";

/// Returns the caller's progress for every node of a course.
///
/// The first fetch unlocks the course's first node for the caller.
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/progress",
    tag = PROGRESS_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Per-node progress", body = Vec<NodeProgressDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_progress(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let progression_service = ProgressionService::new(&state.db);

    let progress = progression_service
        .get_course_progress(user.id, course_id)
        .await?;

    let dtos: Vec<NodeProgressDto> = progress
        .into_iter()
        .map(|p| NodeProgressDto {
            node: CourseNodeDto::from(p.node),
            status: p.status,
            completed_at: p.completed_at,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Starts an available stage, moving it to IN_PROGRESS.
#[utoipa::path(
    post,
    path = "/api/nodes/{node_id}/start",
    tag = PROGRESS_TAG,
    params(
        ("node_id" = i32, Path, description = "Course node ID")
    ),
    responses(
        (status = 204, description = "Stage started"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Stage is locked or not startable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_stage(
    State(state): State<AppState>,
    session: Session,
    Path(node_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let progression_service = ProgressionService::new(&state.db);

    progression_service.start_stage(user.id, node_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Re-evaluates completion for a node based on the caller's linked artifacts.
#[utoipa::path(
    post,
    path = "/api/nodes/{node_id}/check-completion",
    tag = PROGRESS_TAG,
    params(
        ("node_id" = i32, Path, description = "Course node ID")
    ),
    responses(
        (status = 200, description = "Completion evaluated", body = CompletionResultDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Node not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_node_completion(
    State(state): State<AppState>,
    session: Session,
    Path(node_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let progression_service = ProgressionService::new(&state.db);

    let completed = progression_service
        .check_node_completion(user.id, node_id)
        .await?;

    Ok((StatusCode::OK, Json(CompletionResultDto { completed })))
}

/// Overrides a student's node status. Mentor or admin only.
#[utoipa::path(
    put,
    path = "/api/nodes/{node_id}/progress",
    tag = PROGRESS_TAG,
    params(
        ("node_id" = i32, Path, description = "Course node ID")
    ),
    request_body = OverrideNodeStatusDto,
    responses(
        (status = 204, description = "Status overridden"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a mentor or admin", body = ErrorDto),
        (status = 404, description = "Node not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn override_node_status(
    State(state): State<AppState>,
    session: Session,
    Path(node_id): Path<i32>,
    Json(dto): Json<OverrideNodeStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let progression_service = ProgressionService::new(&state.db);

    progression_service
        .override_node_status(&user, dto.user_id, node_id, dto.status)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
