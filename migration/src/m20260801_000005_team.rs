use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000001_user::User;

static FK_TEAM_CREATOR_ID: &str = "fk-team-creator_id";
static FK_TEAM_MENTOR_ID: &str = "fk-team-mentor_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string(Team::Name))
                    .col(string_len_uniq(Team::JoinCode, 6))
                    .col(string_len(Team::Status, 16))
                    .col(integer(Team::MaxMembers))
                    .col(integer(Team::CreatorId))
                    .col(integer_null(Team::MentorId))
                    .col(timestamp(Team::CreatedAt))
                    .col(timestamp(Team::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_CREATOR_ID)
                    .from_tbl(Team::Table)
                    .from_col(Team::CreatorId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_MENTOR_ID)
                    .from_tbl(Team::Table)
                    .from_col(Team::MentorId)
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
                    .name(FK_TEAM_MENTOR_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_CREATOR_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    JoinCode,
    Status,
    MaxMembers,
    CreatorId,
    MentorId,
    CreatedAt,
    UpdatedAt,
}
