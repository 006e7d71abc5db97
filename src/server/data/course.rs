use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct CourseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseRepository<'a> {
    /// Creates a new instance of [`CourseRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, course_id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(course_id)
            .one(self.db)
            .await
    }

    pub async fn list(&self) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .order_by_asc(entity::course::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns a course's nodes in curriculum order.
    pub async fn get_nodes(&self, course_id: i32) -> Result<Vec<entity::course_node::Model>, DbErr> {
        entity::prelude::CourseNode::find()
            .filter(entity::course_node::Column::CourseId.eq(course_id))
            .order_by_asc(entity::course_node::Column::Order)
            .all(self.db)
            .await
    }

    pub async fn get_node(&self, node_id: i32) -> Result<Option<entity::course_node::Model>, DbErr> {
        entity::prelude::CourseNode::find_by_id(node_id)
            .one(self.db)
            .await
    }
}
