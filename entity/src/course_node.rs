use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_node")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: String,
    /// Display label such as "Weeks 1-2"; opaque to the progression engine.
    pub week_range: String,
    pub node_type: String,
    /// Position in the linear curriculum, dense from 1 within a course.
    pub order: i32,
    /// Serialized structured content describing expected work; rendered by
    /// the UI, never interpreted server-side.
    pub required_actions: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::user_node_progress::Entity")]
    UserNodeProgress,
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::user_node_progress::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserNodeProgress.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
