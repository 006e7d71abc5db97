//! Team task board. Every operation is gated on the caller's membership in
//! the task's team; tasks outside the caller's team read as not found.

use entity::project_task::TaskStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{task::TaskRepository, team::TeamRepository},
    error::{team::TeamError, Error},
};
use crate::model::task::{CreateTaskDto, MoveTaskDto, UpdateTaskDto};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    /// Creates a new instance of [`TaskService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn own_team_id(&self, caller: &entity::user::Model) -> Result<i32, Error> {
        let team_repository = TeamRepository::new(self.db);

        let membership = team_repository
            .get_membership(caller.id)
            .await?
            .ok_or(TeamError::NotInTeam)?;

        Ok(membership.team_id)
    }

    async fn own_task(
        &self,
        caller: &entity::user::Model,
        task_id: i32,
    ) -> Result<entity::project_task::Model, Error> {
        let team_id = self.own_team_id(caller).await?;
        let task_repository = TaskRepository::new(self.db);

        let task = task_repository
            .get(task_id)
            .await?
            .ok_or(TeamError::TaskNotFound(task_id))?;

        // Tasks of other teams are indistinguishable from missing ones.
        if task.team_id != team_id {
            return Err(TeamError::TaskNotFound(task_id).into());
        }

        Ok(task)
    }

    /// Lists the caller's team tasks in display order, across all columns.
    pub async fn list_board(
        &self,
        caller: &entity::user::Model,
    ) -> Result<Vec<entity::project_task::Model>, Error> {
        let team_id = self.own_team_id(caller).await?;
        let task_repository = TaskRepository::new(self.db);

        Ok(task_repository.list_for_team(team_id).await?)
    }

    /// Creates a task at the end of its column.
    ///
    /// The position is the current column maximum plus one; an empty column
    /// starts at 1. Concurrent creations can draw the same position, which
    /// the board tolerates.
    pub async fn create_task(
        &self,
        caller: &entity::user::Model,
        create: CreateTaskDto,
    ) -> Result<entity::project_task::Model, Error> {
        let team_id = self.own_team_id(caller).await?;
        let task_repository = TaskRepository::new(self.db);
        let team_repository = TeamRepository::new(self.db);

        if let Some(assignee_id) = create.assignee_id {
            if !team_repository.is_member(team_id, assignee_id).await? {
                return Err(TeamError::AssigneeNotInTeam(assignee_id).into());
            }
        }

        let status = create.status.unwrap_or(TaskStatus::Todo);
        let order = task_repository
            .max_order(team_id, status)
            .await?
            .map_or(1, |max| max + 1);

        Ok(task_repository
            .create(
                team_id,
                create.title,
                create.description,
                status,
                order,
                create.assignee_id,
            )
            .await?)
    }

    pub async fn update_task(
        &self,
        caller: &entity::user::Model,
        task_id: i32,
        update: UpdateTaskDto,
    ) -> Result<entity::project_task::Model, Error> {
        let task = self.own_task(caller, task_id).await?;
        let task_repository = TaskRepository::new(self.db);

        Ok(task_repository
            .update_content(task, update.title, update.description)
            .await?)
    }

    /// Moves a task to a column at the given position, defaulting to the end
    /// of the target column. Only the moved task is written.
    pub async fn move_task(
        &self,
        caller: &entity::user::Model,
        task_id: i32,
        movement: MoveTaskDto,
    ) -> Result<entity::project_task::Model, Error> {
        let task = self.own_task(caller, task_id).await?;
        let task_repository = TaskRepository::new(self.db);

        let order = match movement.order {
            Some(order) => order,
            None => task_repository
                .max_order(task.team_id, movement.status)
                .await?
                .map_or(1, |max| max + 1),
        };

        Ok(task_repository
            .move_to(task, movement.status, order)
            .await?)
    }

    /// Assigns a team member to the task, or clears the assignee.
    pub async fn assign_task(
        &self,
        caller: &entity::user::Model,
        task_id: i32,
        assignee_id: Option<i32>,
    ) -> Result<entity::project_task::Model, Error> {
        let task = self.own_task(caller, task_id).await?;
        let task_repository = TaskRepository::new(self.db);
        let team_repository = TeamRepository::new(self.db);

        if let Some(assignee_id) = assignee_id {
            if !team_repository.is_member(task.team_id, assignee_id).await? {
                return Err(TeamError::AssigneeNotInTeam(assignee_id).into());
            }
        }

        Ok(task_repository.assign(task, assignee_id).await?)
    }

    pub async fn delete_task(
        &self,
        caller: &entity::user::Model,
        task_id: i32,
    ) -> Result<(), Error> {
        let task = self.own_task(caller, task_id).await?;
        let task_repository = TaskRepository::new(self.db);

        task_repository.delete(task.id).await?;

        Ok(())
    }
}
