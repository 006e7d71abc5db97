use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unlock state of a course node for a given user.
///
/// A missing progress row means `Locked`; rows with that status only exist
/// when a mentor override wrote one explicitly.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum NodeStatus {
    #[sea_orm(string_value = "LOCKED")]
    Locked,
    #[sea_orm(string_value = "AVAILABLE")]
    Available,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "COMPLETED")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_node_progress")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// One row per (user, node): insert-or-ignore relies on this pair being
    /// unique.
    #[sea_orm(unique_key = "user_node")]
    pub user_id: i32,
    #[sea_orm(unique_key = "user_node")]
    pub node_id: i32,
    pub status: NodeStatus,
    pub completed_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::course_node::Entity",
        from = "Column::NodeId",
        to = "super::course_node::Column::Id"
    )]
    CourseNode,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::course_node::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseNode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
