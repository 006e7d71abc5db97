//! Course catalog reads and the admin import operation.

use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::course::CourseRepository,
    error::{course::CourseError, Error},
    model::auth::require_role,
};
use crate::model::course::ImportCourseDto;

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    /// Creates a new instance of [`CourseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_courses(&self) -> Result<Vec<entity::course::Model>, Error> {
        let course_repository = CourseRepository::new(self.db);

        Ok(course_repository.list().await?)
    }

    pub async fn get_course(
        &self,
        course_id: i32,
    ) -> Result<(entity::course::Model, Vec<entity::course_node::Model>), Error> {
        let course_repository = CourseRepository::new(self.db);

        let course = course_repository
            .get(course_id)
            .await?
            .ok_or(CourseError::CourseNotFound(course_id))?;
        let nodes = course_repository.get_nodes(course_id).await?;

        Ok((course, nodes))
    }

    /// Imports a course definition with its full node list. Admin only.
    ///
    /// Node orders must form a dense sequence starting at 1 so the
    /// successor unlock lookup can never dead-end on a gap. The course and
    /// all nodes are written in one transaction.
    pub async fn import_course(
        &self,
        caller: &entity::user::Model,
        import: ImportCourseDto,
    ) -> Result<entity::course::Model, Error> {
        require_role(caller, UserRole::Admin)?;

        if import.nodes.is_empty() {
            return Err(CourseError::NoNodes.into());
        }

        let mut nodes = import.nodes;
        nodes.sort_by_key(|node| node.order);

        for (index, node) in nodes.iter().enumerate() {
            let expected = index as i32 + 1;

            if node.order != expected {
                return Err(CourseError::NodeOrderNotDense {
                    expected,
                    found: node.order,
                }
                .into());
            }
        }

        let txn = self.db.begin().await?;
        let now = Utc::now().naive_utc();

        let course = entity::course::ActiveModel {
            title: ActiveValue::Set(import.title),
            description: ActiveValue::Set(import.description),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        };
        let course = course.insert(&txn).await?;

        for node in nodes {
            let row = entity::course_node::ActiveModel {
                course_id: ActiveValue::Set(course.id),
                title: ActiveValue::Set(node.title),
                description: ActiveValue::Set(node.description),
                week_range: ActiveValue::Set(node.week_range),
                node_type: ActiveValue::Set(node.node_type),
                order: ActiveValue::Set(node.order),
                required_actions: ActiveValue::Set(node.required_actions),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            };
            row.insert(&txn).await?;
        }

        txn.commit().await?;

        Ok(course)
    }
}
