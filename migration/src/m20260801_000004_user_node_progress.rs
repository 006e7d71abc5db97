use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_user::User, m20260801_000003_course_node::CourseNode};

static IDX_PROGRESS_USER_ID_NODE_ID: &str = "idx-user_node_progress-user_id-node_id";
static FK_PROGRESS_USER_ID: &str = "fk-user_node_progress-user_id";
static FK_PROGRESS_NODE_ID: &str = "fk-user_node_progress-node_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserNodeProgress::Table)
                    .if_not_exists()
                    .col(pk_auto(UserNodeProgress::Id))
                    .col(integer(UserNodeProgress::UserId))
                    .col(integer(UserNodeProgress::NodeId))
                    .col(string_len(UserNodeProgress::Status, 16))
                    .col(timestamp_null(UserNodeProgress::CompletedAt))
                    .col(timestamp(UserNodeProgress::CreatedAt))
                    .col(timestamp(UserNodeProgress::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // The unique pair index doubles as the de-duplication backstop for
        // the bootstrap race on concurrent first fetches.
        manager
            .create_index(
                Index::create()
                    .name(IDX_PROGRESS_USER_ID_NODE_ID)
                    .table(UserNodeProgress::Table)
                    .col(UserNodeProgress::UserId)
                    .col(UserNodeProgress::NodeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROGRESS_USER_ID)
                    .from_tbl(UserNodeProgress::Table)
                    .from_col(UserNodeProgress::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PROGRESS_NODE_ID)
                    .from_tbl(UserNodeProgress::Table)
                    .from_col(UserNodeProgress::NodeId)
                    .to_tbl(CourseNode::Table)
                    .to_col(CourseNode::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROGRESS_NODE_ID)
                    .table(UserNodeProgress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PROGRESS_USER_ID)
                    .table(UserNodeProgress::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserNodeProgress::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum UserNodeProgress {
    Table,
    Id,
    UserId,
    NodeId,
    Status,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}
