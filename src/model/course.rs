use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseNodeDto {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: String,
    pub week_range: String,
    pub node_type: String,
    pub order: i32,
    pub required_actions: Option<String>,
}

/// Payload for the admin course import operation.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ImportCourseDto {
    pub title: String,
    pub description: String,
    pub nodes: Vec<ImportCourseNodeDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ImportCourseNodeDto {
    pub title: String,
    pub description: String,
    pub week_range: String,
    pub node_type: String,
    pub order: i32,
    pub required_actions: Option<String>,
}

impl From<entity::course::Model> for CourseDto {
    fn from(course: entity::course::Model) -> Self {
        Self {
            id: course.id,
            title: course.title,
            description: course.description,
            created_at: course.created_at,
        }
    }
}

impl From<entity::course_node::Model> for CourseNodeDto {
    fn from(node: entity::course_node::Model) -> Self {
        Self {
            id: node.id,
            course_id: node.course_id,
            title: node.title,
            description: node.description,
            week_range: node.week_range,
            node_type: node.node_type,
            order: node.order,
            required_actions: node.required_actions,
        }
    }
}
