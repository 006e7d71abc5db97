use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_node::Entity")]
    CourseNode,
}

impl Related<super::course_node::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseNode.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
