use chrono::NaiveDateTime;
use entity::team::TeamStatus;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub join_code: String,
    #[schema(value_type = String)]
    pub status: TeamStatus,
    pub max_members: i32,
    pub creator_id: i32,
    pub mentor_id: Option<i32>,
    pub member_count: u64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct JoinTeamDto {
    /// Join code; matched case-insensitively.
    pub code: String,
}
