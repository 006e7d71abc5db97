use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_user::User, m20260801_000008_artifact::Artifact};

static IDX_ARTIFACT_COMMENT_ARTIFACT_ID: &str = "idx-artifact_comment-artifact_id";
static FK_ARTIFACT_COMMENT_ARTIFACT_ID: &str = "fk-artifact_comment-artifact_id";
static FK_ARTIFACT_COMMENT_AUTHOR_ID: &str = "fk-artifact_comment-author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtifactComment::Table)
                    .if_not_exists()
                    .col(pk_auto(ArtifactComment::Id))
                    .col(integer(ArtifactComment::ArtifactId))
                    .col(integer(ArtifactComment::AuthorId))
                    .col(text(ArtifactComment::Content))
                    .col(timestamp(ArtifactComment::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTIFACT_COMMENT_ARTIFACT_ID)
                    .table(ArtifactComment::Table)
                    .col(ArtifactComment::ArtifactId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_COMMENT_ARTIFACT_ID)
                    .from_tbl(ArtifactComment::Table)
                    .from_col(ArtifactComment::ArtifactId)
                    .to_tbl(Artifact::Table)
                    .to_col(Artifact::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_COMMENT_AUTHOR_ID)
                    .from_tbl(ArtifactComment::Table)
                    .from_col(ArtifactComment::AuthorId)
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
                    .name(FK_ARTIFACT_COMMENT_AUTHOR_ID)
                    .table(ArtifactComment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARTIFACT_COMMENT_ARTIFACT_ID)
                    .table(ArtifactComment::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ArtifactComment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ArtifactComment {
    Table,
    Id,
    ArtifactId,
    AuthorId,
    Content,
    CreatedAt,
}
