use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000008_artifact::Artifact;

static FK_ARTIFACT_REFLECTION_ARTIFACT_ID: &str = "fk-artifact_reflection-artifact_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArtifactReflection::Table)
                    .if_not_exists()
                    .col(pk_auto(ArtifactReflection::Id))
                    .col(integer_uniq(ArtifactReflection::ArtifactId))
                    .col(double_null(ArtifactReflection::TimeSavedHours))
                    .col(text_null(ArtifactReflection::Simplification))
                    .col(boolean(ArtifactReflection::ValidatedByMentor))
                    .col(timestamp(ArtifactReflection::CreatedAt))
                    .col(timestamp(ArtifactReflection::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_REFLECTION_ARTIFACT_ID)
                    .from_tbl(ArtifactReflection::Table)
                    .from_col(ArtifactReflection::ArtifactId)
                    .to_tbl(Artifact::Table)
                    .to_col(Artifact::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_ARTIFACT_REFLECTION_ARTIFACT_ID)
                    .table(ArtifactReflection::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ArtifactReflection::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ArtifactReflection {
    Table,
    Id,
    ArtifactId,
    TimeSavedHours,
    Simplification,
    ValidatedByMentor,
    CreatedAt,
    UpdatedAt,
}
