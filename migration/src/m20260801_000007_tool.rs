use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tool::Table)
                    .if_not_exists()
                    .col(pk_auto(Tool::Id))
                    .col(string(Tool::Name))
                    .col(string_len(Tool::Category, 24))
                    .col(string_len(Tool::Pricing, 16))
                    .col(string_len(Tool::UsageStatus, 24))
                    .col(string(Tool::ShortDescription))
                    .col(text(Tool::Description))
                    .col(json(Tool::Badges))
                    .col(string_null(Tool::Url))
                    .col(timestamp(Tool::CreatedAt))
                    .col(timestamp(Tool::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tool::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Tool {
    Table,
    Id,
    Name,
    Category,
    Pricing,
    UsageStatus,
    ShortDescription,
    Description,
    Badges,
    Url,
    CreatedAt,
    UpdatedAt,
}
