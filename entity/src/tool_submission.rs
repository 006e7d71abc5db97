use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review state of a community tool submission.
///
/// There is deliberately no terminal rejected state: a rejected submission
/// stays `PendingReview` with reviewer notes attached.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum SubmissionStatus {
    #[sea_orm(string_value = "PENDING_REVIEW")]
    PendingReview,
    #[sea_orm(string_value = "COMMUNITY_APPROVED")]
    CommunityApproved,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tool_submission")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub submitter_id: i32,
    pub name: String,
    pub description: String,
    pub category: super::tool::ToolCategory,
    pub pricing: super::tool::ToolPricing,
    pub url: Option<String>,
    pub status: SubmissionStatus,
    pub reviewer_notes: Option<String>,
    pub reviewer_id: Option<i32>,
    pub approved_tool_id: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SubmitterId",
        to = "super::user::Column::Id"
    )]
    Submitter,
    #[sea_orm(
        belongs_to = "super::tool::Entity",
        from = "Column::ApprovedToolId",
        to = "super::tool::Column::Id"
    )]
    ApprovedTool,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submitter.def()
    }
}

impl Related<super::tool::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ApprovedTool.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
