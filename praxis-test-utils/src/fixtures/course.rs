use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn course(&self) -> CourseFixtures<'_> {
        CourseFixtures { setup: self }
    }
}

pub struct CourseFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> CourseFixtures<'a> {
    pub async fn insert_course(&self, title: &str) -> Result<entity::course::Model, TestError> {
        Ok(
            entity::prelude::Course::insert(entity::course::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(String::new()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    pub async fn insert_node(
        &self,
        course_id: i32,
        order: i32,
        title: &str,
    ) -> Result<entity::course_node::Model, TestError> {
        Ok(
            entity::prelude::CourseNode::insert(entity::course_node::ActiveModel {
                course_id: ActiveValue::Set(course_id),
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(String::new()),
                week_range: ActiveValue::Set(format!("Weeks {}-{}", order * 2 - 1, order * 2)),
                node_type: ActiveValue::Set("PROJECT".to_string()),
                order: ActiveValue::Set(order),
                required_actions: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Inserts a course with `count` nodes ordered 1..=count.
    pub async fn insert_course_with_nodes(
        &self,
        title: &str,
        count: i32,
    ) -> Result<(entity::course::Model, Vec<entity::course_node::Model>), TestError> {
        let course = self.insert_course(title).await?;

        let mut nodes = Vec::new();
        for order in 1..=count {
            nodes.push(
                self.insert_node(course.id, order, &format!("Stage {}", order))
                    .await?,
            );
        }

        Ok((course, nodes))
    }
}
