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
        artifact::{
            ArtifactCommentDto, ArtifactDto, CreateArtifactDto, ReflectionDto,
            ReviewArtifactDto, SubmitSolutionPlanDto, UpdateArtifactStatusDto,
            UpdateReflectionDto,
        },
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::artifact::ArtifactService,
    },
};

pub static ARTIFACT_TAG: &str = "artifact";

/// Lists the caller's artifacts, newest first.
#[utoipa::path(
    get,
    path = "/api/artifacts",
    tag = ARTIFACT_TAG,
    responses(
        (status = 200, description = "Caller's artifacts", body = Vec<ArtifactDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_artifacts(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    let artifacts = artifact_service.list_own_artifacts(&user).await?;
    let dtos: Vec<ArtifactDto> = artifacts.into_iter().map(ArtifactDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Fetches one artifact. Visible to its owner and to mentors/admins.
#[utoipa::path(
    get,
    path = "/api/artifacts/{artifact_id}",
    tag = ARTIFACT_TAG,
    params(
        ("artifact_id" = i32, Path, description = "Artifact ID")
    ),
    responses(
        (status = 200, description = "Artifact", body = ArtifactDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not view this artifact", body = ErrorDto),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artifact(
    State(state): State<AppState>,
    session: Session,
    Path(artifact_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    let artifact = artifact_service.get_artifact(&user, artifact_id).await?;

    Ok((StatusCode::OK, Json(ArtifactDto::from(artifact))))
}

/// Lists an artifact's comments in posting order.
#[utoipa::path(
    get,
    path = "/api/artifacts/{artifact_id}/comments",
    tag = ARTIFACT_TAG,
    params(
        ("artifact_id" = i32, Path, description = "Artifact ID")
    ),
    responses(
        (status = 200, description = "Artifact comments", body = Vec<ArtifactCommentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller may not view this artifact", body = ErrorDto),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_artifact_comments(
    State(state): State<AppState>,
    session: Session,
    Path(artifact_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    let comments = artifact_service.get_comments(&user, artifact_id).await?;
    let dtos: Vec<ArtifactCommentDto> = comments
        .into_iter()
        .map(ArtifactCommentDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Creates a DRAFT artifact for the caller.
#[utoipa::path(
    post,
    path = "/api/artifacts",
    tag = ARTIFACT_TAG,
    request_body = CreateArtifactDto,
    responses(
        (status = 201, description = "Artifact created", body = ArtifactDto),
        (status = 400, description = "Quota reached or team membership missing", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_artifact(
    State(state): State<AppState>,
    session: Session,
    Json(create): Json<CreateArtifactDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    let artifact = artifact_service.create_artifact(&user, create).await?;

    Ok((StatusCode::CREATED, Json(ArtifactDto::from(artifact))))
}

/// Submits a solution plan, moving the artifact to SUBMITTED. Owner only.
#[utoipa::path(
    put,
    path = "/api/artifacts/{artifact_id}/solution-plan",
    tag = ARTIFACT_TAG,
    params(
        ("artifact_id" = i32, Path, description = "Artifact ID")
    ),
    request_body = SubmitSolutionPlanDto,
    responses(
        (status = 200, description = "Solution plan submitted", body = ArtifactDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not own this artifact", body = ErrorDto),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_solution_plan(
    State(state): State<AppState>,
    session: Session,
    Path(artifact_id): Path<i32>,
    Json(submit): Json<SubmitSolutionPlanDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    let artifact = artifact_service
        .submit_solution_plan(&user, artifact_id, submit.solution_plan)
        .await?;

    Ok((StatusCode::OK, Json(ArtifactDto::from(artifact))))
}

/// Reviews an artifact with optional feedback. Mentor or admin only.
///
/// Requesting improvement through this endpoint requires feedback text,
/// which is stored as a comment on the artifact.
#[utoipa::path(
    put,
    path = "/api/artifacts/{artifact_id}/review",
    tag = ARTIFACT_TAG,
    params(
        ("artifact_id" = i32, Path, description = "Artifact ID")
    ),
    request_body = ReviewArtifactDto,
    responses(
        (status = 200, description = "Artifact reviewed", body = ArtifactDto),
        (status = 400, description = "Feedback missing for improvement request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a mentor or admin", body = ErrorDto),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn review_artifact(
    State(state): State<AppState>,
    session: Session,
    Path(artifact_id): Path<i32>,
    Json(review): Json<ReviewArtifactDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    let artifact = artifact_service
        .review_artifact(&user, artifact_id, review)
        .await?;

    Ok((StatusCode::OK, Json(ArtifactDto::from(artifact))))
}

/// Sets an artifact's status without feedback. Mentor or admin only.
#[utoipa::path(
    put,
    path = "/api/artifacts/{artifact_id}/status",
    tag = ARTIFACT_TAG,
    params(
        ("artifact_id" = i32, Path, description = "Artifact ID")
    ),
    request_body = UpdateArtifactStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ArtifactDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a mentor or admin", body = ErrorDto),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_artifact_status(
    State(state): State<AppState>,
    session: Session,
    Path(artifact_id): Path<i32>,
    Json(update): Json<UpdateArtifactStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    let artifact = artifact_service
        .update_status(&user, artifact_id, update.status)
        .await?;

    Ok((StatusCode::OK, Json(ArtifactDto::from(artifact))))
}

/// Deletes an artifact and everything attached to it. Owner only.
#[utoipa::path(
    delete,
    path = "/api/artifacts/{artifact_id}",
    tag = ARTIFACT_TAG,
    params(
        ("artifact_id" = i32, Path, description = "Artifact ID")
    ),
    responses(
        (status = 204, description = "Artifact deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not own this artifact", body = ErrorDto),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_artifact(
    State(state): State<AppState>,
    session: Session,
    Path(artifact_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    artifact_service.delete_artifact(&user, artifact_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Creates or updates the artifact's reflection. Owner only; any edit
/// resets mentor validation.
#[utoipa::path(
    put,
    path = "/api/artifacts/{artifact_id}/reflection",
    tag = ARTIFACT_TAG,
    params(
        ("artifact_id" = i32, Path, description = "Artifact ID")
    ),
    request_body = UpdateReflectionDto,
    responses(
        (status = 200, description = "Reflection saved", body = ReflectionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller does not own this artifact", body = ErrorDto),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_reflection(
    State(state): State<AppState>,
    session: Session,
    Path(artifact_id): Path<i32>,
    Json(update): Json<UpdateReflectionDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    let reflection = artifact_service
        .update_reflection(&user, artifact_id, update)
        .await?;

    Ok((StatusCode::OK, Json(ReflectionDto::from(reflection))))
}

/// Marks the artifact's reflection as validated. Mentor or admin only.
#[utoipa::path(
    post,
    path = "/api/artifacts/{artifact_id}/reflection/validate",
    tag = ARTIFACT_TAG,
    params(
        ("artifact_id" = i32, Path, description = "Artifact ID")
    ),
    responses(
        (status = 200, description = "Reflection validated", body = ReflectionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a mentor or admin", body = ErrorDto),
        (status = 404, description = "Artifact or reflection not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn validate_reflection(
    State(state): State<AppState>,
    session: Session,
    Path(artifact_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let artifact_service = ArtifactService::new(&state.db);

    let reflection = artifact_service.validate_reflection(&user, artifact_id).await?;

    Ok((StatusCode::OK, Json(ReflectionDto::from(reflection))))
}
