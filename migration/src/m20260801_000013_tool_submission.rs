use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260801_000001_user::User, m20260801_000007_tool::Tool};

static FK_TOOL_SUBMISSION_SUBMITTER_ID: &str = "fk-tool_submission-submitter_id";
static FK_TOOL_SUBMISSION_REVIEWER_ID: &str = "fk-tool_submission-reviewer_id";
static FK_TOOL_SUBMISSION_APPROVED_TOOL_ID: &str = "fk-tool_submission-approved_tool_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ToolSubmission::Table)
                    .if_not_exists()
                    .col(pk_auto(ToolSubmission::Id))
                    .col(integer(ToolSubmission::SubmitterId))
                    .col(string(ToolSubmission::Name))
                    .col(text(ToolSubmission::Description))
                    .col(string_len(ToolSubmission::Category, 24))
                    .col(string_len(ToolSubmission::Pricing, 16))
                    .col(string_null(ToolSubmission::Url))
                    .col(string_len(ToolSubmission::Status, 24))
                    .col(text_null(ToolSubmission::ReviewerNotes))
                    .col(integer_null(ToolSubmission::ReviewerId))
                    .col(integer_null(ToolSubmission::ApprovedToolId))
                    .col(timestamp(ToolSubmission::CreatedAt))
                    .col(timestamp(ToolSubmission::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOOL_SUBMISSION_SUBMITTER_ID)
                    .from_tbl(ToolSubmission::Table)
                    .from_col(ToolSubmission::SubmitterId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOOL_SUBMISSION_REVIEWER_ID)
                    .from_tbl(ToolSubmission::Table)
                    .from_col(ToolSubmission::ReviewerId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TOOL_SUBMISSION_APPROVED_TOOL_ID)
                    .from_tbl(ToolSubmission::Table)
                    .from_col(ToolSubmission::ApprovedToolId)
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
                    .name(FK_TOOL_SUBMISSION_APPROVED_TOOL_ID)
                    .table(ToolSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TOOL_SUBMISSION_REVIEWER_ID)
                    .table(ToolSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TOOL_SUBMISSION_SUBMITTER_ID)
                    .table(ToolSubmission::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ToolSubmission::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ToolSubmission {
    Table,
    Id,
    SubmitterId,
    Name,
    Description,
    Category,
    Pricing,
    Url,
    Status,
    ReviewerNotes,
    ReviewerId,
    ApprovedToolId,
    CreatedAt,
    UpdatedAt,
}
