use chrono::NaiveDateTime;
use entity::project_task::TaskStatus;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TaskDto {
    pub id: i32,
    pub team_id: i32,
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = String)]
    pub status: TaskStatus,
    pub order: i32,
    pub assignee_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// The team task board partitioned by status, each column in display order.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TaskBoardDto {
    pub todo: Vec<TaskDto>,
    pub in_progress: Vec<TaskDto>,
    pub done: Vec<TaskDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTaskDto {
    pub title: String,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub status: Option<TaskStatus>,
    pub assignee_id: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateTaskDto {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MoveTaskDto {
    #[schema(value_type = String)]
    pub status: TaskStatus,
    /// Explicit display position; defaults to end-of-bucket when omitted.
    pub order: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignTaskDto {
    /// Member to assign, or null to unassign.
    pub assignee_id: Option<i32>,
}

impl From<entity::project_task::Model> for TaskDto {
    fn from(task: entity::project_task::Model) -> Self {
        Self {
            id: task.id,
            team_id: task.team_id,
            title: task.title,
            description: task.description,
            status: task.status,
            order: task.order,
            assignee_id: task.assignee_id,
            created_at: task.created_at,
        }
    }
}
