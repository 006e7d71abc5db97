use chrono::Utc;
use entity::tool::{ToolCategory, ToolPricing, ToolUsageStatus};
use entity::tool_submission::SubmissionStatus;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

/// Catalog filters; all optional, combined with AND.
#[derive(Default)]
pub struct ToolSearchFilter {
    pub search: Option<String>,
    pub category: Option<ToolCategory>,
    pub usage_status: Option<ToolUsageStatus>,
}

pub struct ToolRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToolRepository<'a> {
    /// Creates a new instance of [`ToolRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, tool_id: i32) -> Result<Option<entity::tool::Model>, DbErr> {
        entity::prelude::Tool::find_by_id(tool_id).one(self.db).await
    }

    /// Searches the published catalog. Free text is matched case-insensitively
    /// as a substring of the name and both descriptions. Pending submissions
    /// live in their own table and never reach this query.
    pub async fn search(
        &self,
        filter: ToolSearchFilter,
    ) -> Result<Vec<entity::tool::Model>, DbErr> {
        let mut query = entity::prelude::Tool::find();

        if let Some(text) = filter.search {
            let pattern = format!("%{}%", text.to_lowercase());

            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::tool::Column::Name)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(
                            entity::tool::Column::ShortDescription,
                        )))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::tool::Column::Description)))
                            .like(pattern),
                    ),
            );
        }

        if let Some(category) = filter.category {
            query = query.filter(entity::tool::Column::Category.eq(category));
        }

        if let Some(usage_status) = filter.usage_status {
            query = query.filter(entity::tool::Column::UsageStatus.eq(usage_status));
        }

        query
            .order_by_asc(entity::tool::Column::Name)
            .all(self.db)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: String,
        category: ToolCategory,
        pricing: ToolPricing,
        usage_status: ToolUsageStatus,
        short_description: String,
        description: String,
        badges: Vec<String>,
        url: Option<String>,
    ) -> Result<entity::tool::Model, DbErr> {
        let tool = entity::tool::ActiveModel {
            name: ActiveValue::Set(name),
            category: ActiveValue::Set(category),
            pricing: ActiveValue::Set(pricing),
            usage_status: ActiveValue::Set(usage_status),
            short_description: ActiveValue::Set(short_description),
            description: ActiveValue::Set(description),
            badges: ActiveValue::Set(serde_json::json!(badges)),
            url: ActiveValue::Set(url),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        tool.insert(self.db).await
    }
}

pub struct ToolSubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToolSubmissionRepository<'a> {
    /// Creates a new instance of [`ToolSubmissionRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        submission_id: i32,
    ) -> Result<Option<entity::tool_submission::Model>, DbErr> {
        entity::prelude::ToolSubmission::find_by_id(submission_id)
            .one(self.db)
            .await
    }

    pub async fn list_pending(&self) -> Result<Vec<entity::tool_submission::Model>, DbErr> {
        entity::prelude::ToolSubmission::find()
            .filter(entity::tool_submission::Column::Status.eq(SubmissionStatus::PendingReview))
            .order_by_asc(entity::tool_submission::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        submitter_id: i32,
        name: String,
        description: String,
        category: ToolCategory,
        pricing: ToolPricing,
        url: Option<String>,
    ) -> Result<entity::tool_submission::Model, DbErr> {
        let submission = entity::tool_submission::ActiveModel {
            submitter_id: ActiveValue::Set(submitter_id),
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            category: ActiveValue::Set(category),
            pricing: ActiveValue::Set(pricing),
            url: ActiveValue::Set(url),
            status: ActiveValue::Set(SubmissionStatus::PendingReview),
            reviewer_notes: ActiveValue::Set(None),
            reviewer_id: ActiveValue::Set(None),
            approved_tool_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        submission.insert(self.db).await
    }

    /// Records a rejection: reviewer and notes are attached but the status
    /// stays PENDING_REVIEW. There is no terminal rejected state.
    pub async fn record_rejection(
        &self,
        submission: entity::tool_submission::Model,
        reviewer_id: i32,
        notes: Option<String>,
    ) -> Result<entity::tool_submission::Model, DbErr> {
        let mut row: entity::tool_submission::ActiveModel = submission.into();
        row.reviewer_id = ActiveValue::Set(Some(reviewer_id));
        row.reviewer_notes = ActiveValue::Set(notes);
        row.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        row.update(self.db).await
    }
}
