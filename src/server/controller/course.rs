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
        course::{CourseDto, CourseNodeDto, ImportCourseDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::course::CourseService,
    },
};

pub static COURSE_TAG: &str = "course";

/// Lists all courses.
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses", body = Vec<CourseDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courses(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let course_service = CourseService::new(&state.db);

    let courses = course_service.list_courses().await?;
    let dtos: Vec<CourseDto> = courses.into_iter().map(CourseDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Returns a course's nodes in curriculum order.
#[utoipa::path(
    get,
    path = "/api/courses/{course_id}/nodes",
    tag = COURSE_TAG,
    params(
        ("course_id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course nodes", body = Vec<CourseNodeDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course_nodes(
    State(state): State<AppState>,
    session: Session,
    Path(course_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let course_service = CourseService::new(&state.db);

    let (_, nodes) = course_service.get_course(course_id).await?;
    let dtos: Vec<CourseNodeDto> = nodes.into_iter().map(CourseNodeDto::from).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Imports a course definition with its node list. Admin only.
#[utoipa::path(
    post,
    path = "/api/courses/import",
    tag = COURSE_TAG,
    request_body = ImportCourseDto,
    responses(
        (status = 201, description = "Course imported", body = CourseDto),
        (status = 400, description = "Empty or non-dense node list", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_course(
    State(state): State<AppState>,
    session: Session,
    Json(import): Json<ImportCourseDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let course_service = CourseService::new(&state.db);

    let course = course_service.import_course(&user, import).await?;

    Ok((StatusCode::CREATED, Json(CourseDto::from(course))))
}
