use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::project_task::TaskStatus;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        task::{AssignTaskDto, CreateTaskDto, MoveTaskDto, TaskBoardDto, TaskDto, UpdateTaskDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::app::AppState,
        service::task::TaskService,
    },
};

pub static TASK_TAG: &str = "task";

fn to_board(tasks: Vec<entity::project_task::Model>) -> TaskBoardDto {
    let mut board = TaskBoardDto {
        todo: Vec::new(),
        in_progress: Vec::new(),
        done: Vec::new(),
    };

    for task in tasks {
        let column = match task.status {
            TaskStatus::Todo => &mut board.todo,
            TaskStatus::InProgress => &mut board.in_progress,
            TaskStatus::Done => &mut board.done,
        };
        column.push(TaskDto::from(task));
    }

    board
}

/// Returns the caller's team task board, partitioned by column.
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "Team task board", body = TaskBoardDto),
        (status = 400, description = "Caller is not in a team", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task_board(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let task_service = TaskService::new(&state.db);

    let tasks = task_service.list_board(&user).await?;

    Ok((StatusCode::OK, Json(to_board(tasks))))
}

/// Creates a task at the end of its column.
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Not in a team or assignee not a member", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    Json(create): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let task_service = TaskService::new(&state.db);

    let task = task_service.create_task(&user, create).await?;

    Ok((StatusCode::CREATED, Json(TaskDto::from(task))))
}

/// Updates a task's title or description.
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(update): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let task_service = TaskService::new(&state.db);

    let task = task_service.update_task(&user, task_id, update).await?;

    Ok((StatusCode::OK, Json(TaskDto::from(task))))
}

/// Moves a task to a column, defaulting to the end of the target column.
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}/move",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = MoveTaskDto,
    responses(
        (status = 200, description = "Task moved", body = TaskDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(movement): Json<MoveTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let task_service = TaskService::new(&state.db);

    let task = task_service.move_task(&user, task_id, movement).await?;

    Ok((StatusCode::OK, Json(TaskDto::from(task))))
}

/// Assigns a team member to a task, or clears the assignee.
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}/assignee",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    request_body = AssignTaskDto,
    responses(
        (status = 200, description = "Assignee updated", body = TaskDto),
        (status = 400, description = "Assignee is not a team member", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
    Json(assign): Json<AssignTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let task_service = TaskService::new(&state.db);

    let task = task_service
        .assign_task(&user, task_id, assign.assignee_id)
        .await?;

    Ok((StatusCode::OK, Json(TaskDto::from(task))))
}

/// Deletes a task.
#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let task_service = TaskService::new(&state.db);

    task_service.delete_task(&user, task_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
