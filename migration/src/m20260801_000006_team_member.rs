use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_user::User, m20260801_000005_team::Team};

static IDX_TEAM_MEMBER_TEAM_ID_USER_ID: &str = "idx-team_member-team_id-user_id";
static FK_TEAM_MEMBER_TEAM_ID: &str = "fk-team_member-team_id";
static FK_TEAM_MEMBER_USER_ID: &str = "fk-team_member-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamMember::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamMember::Id))
                    .col(integer(TeamMember::TeamId))
                    .col(integer(TeamMember::UserId))
                    .col(timestamp(TeamMember::JoinedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_MEMBER_TEAM_ID_USER_ID)
                    .table(TeamMember::Table)
                    .col(TeamMember::TeamId)
                    .col(TeamMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_MEMBER_TEAM_ID)
                    .from_tbl(TeamMember::Table)
                    .from_col(TeamMember::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_MEMBER_USER_ID)
                    .from_tbl(TeamMember::Table)
                    .from_col(TeamMember::UserId)
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
                    .name(FK_TEAM_MEMBER_USER_ID)
                    .table(TeamMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_MEMBER_TEAM_ID)
                    .table(TeamMember::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamMember::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TeamMember {
    Table,
    Id,
    TeamId,
    UserId,
    JoinedAt,
}
