use chrono::NaiveDateTime;
use entity::user_node_progress::NodeStatus;
use serde::{Deserialize, Serialize};

use crate::model::course::CourseNodeDto;

/// A course node joined with the requesting user's unlock state.
///
/// Nodes without a stored progress row surface as `Locked`.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NodeProgressDto {
    pub node: CourseNodeDto,
    #[schema(value_type = String)]
    pub status: NodeStatus,
    pub completed_at: Option<NaiveDateTime>,
}

/// Mentor override payload: sets a student's node status directly,
/// bypassing the normal transition rules.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OverrideNodeStatusDto {
    pub user_id: i32,
    #[schema(value_type = String)]
    pub status: NodeStatus,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CompletionResultDto {
    /// Whether a completion actually occurred. False means the user had no
    /// artifact linked to the node and nothing was changed.
    pub completed: bool,
}
