use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ArtifactType {
    #[sea_orm(string_value = "SCHOOL")]
    School,
    #[sea_orm(string_value = "PERSONAL")]
    Personal,
    #[sea_orm(string_value = "TEAM")]
    Team,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(24))")]
pub enum ArtifactStatus {
    #[sea_orm(string_value = "DRAFT")]
    Draft,
    #[sea_orm(string_value = "SUBMITTED")]
    Submitted,
    #[sea_orm(string_value = "IN_PROGRESS")]
    InProgress,
    #[sea_orm(string_value = "VALIDATED")]
    Validated,
    #[sea_orm(string_value = "NEEDS_IMPROVEMENT")]
    NeedsImprovement,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "artifact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub team_id: Option<i32>,
    pub course_node_id: Option<i32>,
    pub title: String,
    pub problem: String,
    pub goal: String,
    pub artifact_type: ArtifactType,
    pub status: ArtifactStatus,
    pub solution_plan: Option<String>,
    pub content: Option<String>,
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
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id"
    )]
    Team,
    #[sea_orm(
        belongs_to = "super::course_node::Entity",
        from = "Column::CourseNodeId",
        to = "super::course_node::Column::Id"
    )]
    CourseNode,
    #[sea_orm(has_many = "super::artifact_tool::Entity")]
    ArtifactTool,
    #[sea_orm(has_many = "super::artifact_comment::Entity")]
    ArtifactComment,
    #[sea_orm(has_one = "super::artifact_reflection::Entity")]
    ArtifactReflection,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<super::artifact_tool::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtifactTool.def()
    }
}

impl Related<super::artifact_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtifactComment.def()
    }
}

impl Related<super::artifact_reflection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtifactReflection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
