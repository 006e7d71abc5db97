use chrono::Utc;
use entity::project_task::TaskStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    /// Creates a new instance of [`TaskRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, task_id: i32) -> Result<Option<entity::project_task::Model>, DbErr> {
        entity::prelude::ProjectTask::find_by_id(task_id)
            .one(self.db)
            .await
    }

    pub async fn list_for_team(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::project_task::Model>, DbErr> {
        entity::prelude::ProjectTask::find()
            .filter(entity::project_task::Column::TeamId.eq(team_id))
            .order_by_asc(entity::project_task::Column::Order)
            .all(self.db)
            .await
    }

    /// Highest `order` in the (team, status) bucket, if the bucket is
    /// non-empty. Racing reads can hand out the same max; duplicate orders
    /// are tolerated for display sequencing.
    pub async fn max_order(&self, team_id: i32, status: TaskStatus) -> Result<Option<i32>, DbErr> {
        let top = entity::prelude::ProjectTask::find()
            .filter(entity::project_task::Column::TeamId.eq(team_id))
            .filter(entity::project_task::Column::Status.eq(status))
            .order_by_desc(entity::project_task::Column::Order)
            .one(self.db)
            .await?;

        Ok(top.map(|task| task.order))
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        team_id: i32,
        title: String,
        description: Option<String>,
        status: TaskStatus,
        order: i32,
        assignee_id: Option<i32>,
    ) -> Result<entity::project_task::Model, DbErr> {
        let task = entity::project_task::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            title: ActiveValue::Set(title),
            description: ActiveValue::Set(description),
            status: ActiveValue::Set(status),
            order: ActiveValue::Set(order),
            assignee_id: ActiveValue::Set(assignee_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        task.insert(self.db).await
    }

    pub async fn update_content(
        &self,
        task: entity::project_task::Model,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<entity::project_task::Model, DbErr> {
        let mut row: entity::project_task::ActiveModel = task.into();
        if let Some(title) = title {
            row.title = ActiveValue::Set(title);
        }
        if let Some(description) = description {
            row.description = ActiveValue::Set(Some(description));
        }
        row.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        row.update(self.db).await
    }

    /// Overwrites status and order on the moved task only; siblings are
    /// never reflowed.
    pub async fn move_to(
        &self,
        task: entity::project_task::Model,
        status: TaskStatus,
        order: i32,
    ) -> Result<entity::project_task::Model, DbErr> {
        let mut row: entity::project_task::ActiveModel = task.into();
        row.status = ActiveValue::Set(status);
        row.order = ActiveValue::Set(order);
        row.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        row.update(self.db).await
    }

    pub async fn assign(
        &self,
        task: entity::project_task::Model,
        assignee_id: Option<i32>,
    ) -> Result<entity::project_task::Model, DbErr> {
        let mut row: entity::project_task::ActiveModel = task.into();
        row.assignee_id = ActiveValue::Set(assignee_id);
        row.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        row.update(self.db).await
    }

    pub async fn delete(&self, task_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::ProjectTask::delete_by_id(task_id)
            .exec(self.db)
            .await
    }
}
