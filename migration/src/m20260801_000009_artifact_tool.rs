use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000007_tool::Tool, m20260801_000008_artifact::Artifact};

static IDX_ARTIFACT_TOOL_ARTIFACT_ID: &str = "idx-artifact_tool-artifact_id";
static FK_ARTIFACT_TOOL_ARTIFACT_ID: &str = "fk-artifact_tool-artifact_id";
static FK_ARTIFACT_TOOL_TOOL_ID: &str = "fk-artifact_tool-tool_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtifactTool::Table)
                    .if_not_exists()
                    .col(pk_auto(ArtifactTool::Id))
                    .col(integer(ArtifactTool::ArtifactId))
                    .col(integer(ArtifactTool::ToolId))
                    .col(timestamp(ArtifactTool::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTIFACT_TOOL_ARTIFACT_ID)
                    .table(ArtifactTool::Table)
                    .col(ArtifactTool::ArtifactId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_TOOL_ARTIFACT_ID)
                    .from_tbl(ArtifactTool::Table)
                    .from_col(ArtifactTool::ArtifactId)
                    .to_tbl(Artifact::Table)
                    .to_col(Artifact::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_TOOL_TOOL_ID)
                    .from_tbl(ArtifactTool::Table)
                    .from_col(ArtifactTool::ToolId)
                    .to_tbl(Tool::Table)
                    .to_col(Tool::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARTIFACT_TOOL_TOOL_ID)
                    .table(ArtifactTool::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARTIFACT_TOOL_ARTIFACT_ID)
                    .table(ArtifactTool::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ArtifactTool::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ArtifactTool {
    Table,
    Id,
    ArtifactId,
    ToolId,
    CreatedAt,
}
