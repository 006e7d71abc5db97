use chrono::{NaiveDateTime, Utc};
use entity::user_node_progress::NodeStatus;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter,
};

pub struct ProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressRepository<'a> {
    /// Creates a new instance of [`ProgressRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        user_id: i32,
        node_id: i32,
    ) -> Result<Option<entity::user_node_progress::Model>, DbErr> {
        entity::prelude::UserNodeProgress::find()
            .filter(entity::user_node_progress::Column::UserId.eq(user_id))
            .filter(entity::user_node_progress::Column::NodeId.eq(node_id))
            .one(self.db)
            .await
    }

    /// Returns the user's progress rows for the given nodes.
    pub async fn get_by_node_ids(
        &self,
        user_id: i32,
        node_ids: Vec<i32>,
    ) -> Result<Vec<entity::user_node_progress::Model>, DbErr> {
        entity::prelude::UserNodeProgress::find()
            .filter(entity::user_node_progress::Column::UserId.eq(user_id))
            .filter(entity::user_node_progress::Column::NodeId.is_in(node_ids))
            .all(self.db)
            .await
    }

    /// Inserts a progress row unless one already exists for the pair.
    ///
    /// A concurrent writer racing this insert loses against the unique
    /// (user_id, node_id) index; that outcome is returned as `Ok(None)`
    /// instead of an error so bootstrap and unlock stay idempotent.
    pub async fn insert_if_missing(
        &self,
        user_id: i32,
        node_id: i32,
        status: NodeStatus,
    ) -> Result<Option<entity::user_node_progress::Model>, DbErr> {
        let now = Utc::now().naive_utc();

        let row = entity::user_node_progress::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            node_id: ActiveValue::Set(node_id),
            status: ActiveValue::Set(status),
            completed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        let result = entity::prelude::UserNodeProgress::insert(row)
            .on_conflict(
                OnConflict::columns([
                    entity::user_node_progress::Column::UserId,
                    entity::user_node_progress::Column::NodeId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec(self.db)
            .await;

        match result {
            Ok(_) => self.get(user_id, node_id).await,
            Err(DbErr::RecordNotInserted) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Updates an existing row's status and completion timestamp.
    pub async fn update_status(
        &self,
        progress: entity::user_node_progress::Model,
        status: NodeStatus,
        completed_at: Option<NaiveDateTime>,
    ) -> Result<entity::user_node_progress::Model, DbErr> {
        let mut row: entity::user_node_progress::ActiveModel = progress.into();
        row.status = ActiveValue::Set(status);
        row.completed_at = ActiveValue::Set(completed_at);
        row.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        row.update(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use entity::user_node_progress::NodeStatus;
    use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, DbErr, Schema};

    use crate::server::{
        data::progress::ProgressRepository,
        util::test::setup::{test_setup, test_setup_create_user},
    };

    async fn setup() -> Result<(DatabaseConnection, i32, i32), DbErr> {
        let test = test_setup().await;
        let db = test.state.db.clone();
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::User),
            schema.create_table_from_entity(entity::prelude::Course),
            schema.create_table_from_entity(entity::prelude::CourseNode),
            schema.create_table_from_entity(entity::prelude::UserNodeProgress),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        for stmt in schema.create_index_from_entity(entity::prelude::UserNodeProgress) {
            db.execute(&stmt).await?;
        }

        let user =
            test_setup_create_user(&test, "s@praxis.dev", entity::user::UserRole::Student).await?;

        use chrono::Utc;
        use sea_orm::{ActiveModelTrait, ActiveValue};

        let course = entity::course::ActiveModel {
            title: ActiveValue::Set("Course".to_string()),
            description: ActiveValue::Set("".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        let course = course.insert(&db).await?;

        let node = entity::course_node::ActiveModel {
            course_id: ActiveValue::Set(course.id),
            title: ActiveValue::Set("Node 1".to_string()),
            description: ActiveValue::Set("".to_string()),
            week_range: ActiveValue::Set("Weeks 1-2".to_string()),
            node_type: ActiveValue::Set("PROJECT".to_string()),
            order: ActiveValue::Set(1),
            required_actions: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };
        let node = node.insert(&db).await?;

        Ok((db, user.id, node.id))
    }

    /// Expect the second insert for the same pair to be a silent no-op
    #[tokio::test]
    async fn test_insert_if_missing_deduplicates() -> Result<(), DbErr> {
        let (db, user_id, node_id) = setup().await?;
        let progress_repository = ProgressRepository::new(&db);

        let first = progress_repository
            .insert_if_missing(user_id, node_id, NodeStatus::Available)
            .await?;

        assert!(first.is_some());

        let second = progress_repository
            .insert_if_missing(user_id, node_id, NodeStatus::Available)
            .await?;

        assert!(second.is_none());

        let row = progress_repository.get(user_id, node_id).await?.unwrap();

        assert_eq!(row.status, NodeStatus::Available);

        Ok(())
    }

    #[tokio::test]
    async fn test_update_status_sets_completed_at() -> Result<(), DbErr> {
        let (db, user_id, node_id) = setup().await?;
        let progress_repository = ProgressRepository::new(&db);

        let row = progress_repository
            .insert_if_missing(user_id, node_id, NodeStatus::Available)
            .await?
            .unwrap();

        let completed_at = chrono::Utc::now().naive_utc();
        let updated = progress_repository
            .update_status(row, NodeStatus::Completed, Some(completed_at))
            .await?;

        assert_eq!(updated.status, NodeStatus::Completed);
        assert!(updated.completed_at.is_some());

        Ok(())
    }

    /// Expect error when required tables have not been created
    #[tokio::test]
    async fn test_insert_error_without_tables() {
        let test = test_setup().await;
        let progress_repository = ProgressRepository::new(&test.state.db);

        let result = progress_repository
            .insert_if_missing(1, 1, NodeStatus::Available)
            .await;

        assert!(result.is_err());
    }
}
