use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260801_000002_course::Course;

static IDX_COURSE_NODE_COURSE_ID_ORDER: &str = "idx-course_node-course_id-order";
static FK_COURSE_NODE_COURSE_ID: &str = "fk-course_node-course_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CourseNode::Table)
                    .if_not_exists()
                    .col(pk_auto(CourseNode::Id))
                    .col(integer(CourseNode::CourseId))
                    .col(string(CourseNode::Title))
                    .col(text(CourseNode::Description))
                    .col(string(CourseNode::WeekRange))
                    .col(string(CourseNode::NodeType))
                    .col(integer(CourseNode::Order))
                    .col(text_null(CourseNode::RequiredActions))
                    .col(timestamp(CourseNode::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COURSE_NODE_COURSE_ID_ORDER)
                    .table(CourseNode::Table)
                    .col(CourseNode::CourseId)
                    .col(CourseNode::Order)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_COURSE_NODE_COURSE_ID)
                    .from_tbl(CourseNode::Table)
                    .from_col(CourseNode::CourseId)
                    .to_tbl(Course::Table)
                    .to_col(Course::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_COURSE_NODE_COURSE_ID)
                    .table(CourseNode::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(CourseNode::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CourseNode {
    Table,
    Id,
    CourseId,
    Title,
    Description,
    WeekRange,
    NodeType,
    Order,
    RequiredActions,
    CreatedAt,
}
