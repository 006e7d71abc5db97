use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260801_000001_user::User, m20260801_000003_course_node::CourseNode,
    m20260801_000005_team::Team,
};

static IDX_ARTIFACT_USER_ID: &str = "idx-artifact-user_id";
static IDX_ARTIFACT_COURSE_NODE_ID: &str = "idx-artifact-course_node_id";
static FK_ARTIFACT_USER_ID: &str = "fk-artifact-user_id";
static FK_ARTIFACT_TEAM_ID: &str = "fk-artifact-team_id";
static FK_ARTIFACT_COURSE_NODE_ID: &str = "fk-artifact-course_node_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artifact::Table)
                    .if_not_exists()
                    .col(pk_auto(Artifact::Id))
                    .col(integer(Artifact::UserId))
                    .col(integer_null(Artifact::TeamId))
                    .col(integer_null(Artifact::CourseNodeId))
                    .col(string(Artifact::Title))
                    .col(text(Artifact::Problem))
                    .col(text(Artifact::Goal))
                    .col(string_len(Artifact::ArtifactType, 16))
                    .col(string_len(Artifact::Status, 24))
                    .col(text_null(Artifact::SolutionPlan))
                    .col(text_null(Artifact::Content))
                    .col(timestamp(Artifact::CreatedAt))
                    .col(timestamp(Artifact::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTIFACT_USER_ID)
                    .table(Artifact::Table)
                    .col(Artifact::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTIFACT_COURSE_NODE_ID)
                    .table(Artifact::Table)
                    .col(Artifact::CourseNodeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_USER_ID)
                    .from_tbl(Artifact::Table)
                    .from_col(Artifact::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_TEAM_ID)
                    .from_tbl(Artifact::Table)
                    .from_col(Artifact::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_COURSE_NODE_ID)
                    .from_tbl(Artifact::Table)
                    .from_col(Artifact::CourseNodeId)
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
                    .name(FK_ARTIFACT_COURSE_NODE_ID)
                    .table(Artifact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARTIFACT_TEAM_ID)
                    .table(Artifact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARTIFACT_USER_ID)
                    .table(Artifact::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Artifact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Artifact {
    Table,
    Id,
    UserId,
    TeamId,
    CourseNodeId,
    Title,
    Problem,
    Goal,
    ArtifactType,
    Status,
    SolutionPlan,
    Content,
    CreatedAt,
    UpdatedAt,
}
