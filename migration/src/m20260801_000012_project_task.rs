use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_user::User, m20260801_000005_team::Team};

static IDX_PROJECT_TASK_TEAM_ID_STATUS: &str = "idx-project_task-team_id-status";
static FK_PROJECT_TASK_TEAM_ID: &str = "fk-project_task-team_id";
static FK_PROJECT_TASK_ASSIGNEE_ID: &str = "fk-project_task-assignee_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProjectTask::Table)
                    .if_not_exists()
                    .col(pk_auto(ProjectTask::Id))
                    .col(integer(ProjectTask::TeamId))
                    .col(string(ProjectTask::Title))
                    .col(text_null(ProjectTask::Description))
                    .col(string_len(ProjectTask::Status, 16))
                    .col(integer(ProjectTask::Order))
                    .col(integer_null(ProjectTask::AssigneeId))
                    .col(timestamp(ProjectTask::CreatedAt))
                    .col(timestamp(ProjectTask::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Non-unique: duplicate orders within a bucket are tolerated.
        manager
            .create_index(
                Index::create()
                    .name(IDX_PROJECT_TASK_TEAM_ID_STATUS)
                    .table(ProjectTask::Table)
                    .col(ProjectTask::TeamId)
                    .col(ProjectTask::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_TASK_TEAM_ID)
                    .from_tbl(ProjectTask::Table)
                    .from_col(ProjectTask::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROJECT_TASK_ASSIGNEE_ID)
                    .from_tbl(ProjectTask::Table)
                    .from_col(ProjectTask::AssigneeId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROJECT_TASK_ASSIGNEE_ID)
                    .table(ProjectTask::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROJECT_TASK_TEAM_ID)
                    .table(ProjectTask::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectTask::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ProjectTask {
    Table,
    Id,
    TeamId,
    Title,
    Description,
    Status,
    Order,
    AssigneeId,
    CreatedAt,
    UpdatedAt,
}
