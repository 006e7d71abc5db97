use chrono::NaiveDateTime;
use entity::artifact::{ArtifactStatus, ArtifactType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ArtifactDto {
    pub id: i32,
    pub user_id: i32,
    pub team_id: Option<i32>,
    pub course_node_id: Option<i32>,
    pub title: String,
    pub problem: String,
    pub goal: String,
    #[schema(value_type = String)]
    pub artifact_type: ArtifactType,
    #[schema(value_type = String)]
    pub status: ArtifactStatus,
    pub solution_plan: Option<String>,
    pub content: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateArtifactDto {
    pub title: String,
    pub problem: String,
    pub goal: String,
    #[schema(value_type = String)]
    pub artifact_type: ArtifactType,
    pub course_node_id: Option<i32>,
    #[serde(default)]
    pub tool_ids: Vec<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubmitSolutionPlanDto {
    pub solution_plan: String,
}

/// Mentor review decision with optional feedback. Feedback is mandatory when
/// requesting improvement through this entry point.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewArtifactDto {
    #[schema(value_type = String)]
    pub status: ArtifactStatus,
    pub feedback: Option<String>,
}

/// Bare mentor status update; unlike [`ReviewArtifactDto`] this path does not
/// require feedback text.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateArtifactStatusDto {
    #[schema(value_type = String)]
    pub status: ArtifactStatus,
}

/// Feedback left on an artifact, in posting order. Review feedback lands
/// here alongside freeform comments.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ArtifactCommentDto {
    pub id: i32,
    pub artifact_id: i32,
    pub author_id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateReflectionDto {
    pub time_saved_hours: Option<f64>,
    pub simplification: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReflectionDto {
    pub artifact_id: i32,
    pub time_saved_hours: Option<f64>,
    pub simplification: Option<String>,
    pub validated_by_mentor: bool,
    pub updated_at: NaiveDateTime,
}

impl From<entity::artifact::Model> for ArtifactDto {
    fn from(artifact: entity::artifact::Model) -> Self {
        Self {
            id: artifact.id,
            user_id: artifact.user_id,
            team_id: artifact.team_id,
            course_node_id: artifact.course_node_id,
            title: artifact.title,
            problem: artifact.problem,
            goal: artifact.goal,
            artifact_type: artifact.artifact_type,
            status: artifact.status,
            solution_plan: artifact.solution_plan,
            content: artifact.content,
            created_at: artifact.created_at,
            updated_at: artifact.updated_at,
        }
    }
}

impl From<entity::artifact_comment::Model> for ArtifactCommentDto {
    fn from(comment: entity::artifact_comment::Model) -> Self {
        Self {
            id: comment.id,
            artifact_id: comment.artifact_id,
            author_id: comment.author_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

impl From<entity::artifact_reflection::Model> for ReflectionDto {
    fn from(reflection: entity::artifact_reflection::Model) -> Self {
        Self {
            artifact_id: reflection.artifact_id,
            time_saved_hours: reflection.time_saved_hours,
            simplification: reflection.simplification,
            validated_by_mentor: reflection.validated_by_mentor,
            updated_at: reflection.updated_at,
        }
    }
}
