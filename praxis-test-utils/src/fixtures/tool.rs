use chrono::Utc;
use entity::tool::{ToolCategory, ToolPricing, ToolUsageStatus};
use entity::tool_submission::SubmissionStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn tool(&self) -> ToolFixtures<'_> {
        ToolFixtures { setup: self }
    }
}

pub struct ToolFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> ToolFixtures<'a> {
    pub async fn insert_tool(
        &self,
        name: &str,
        category: ToolCategory,
        usage_status: ToolUsageStatus,
    ) -> Result<entity::tool::Model, TestError> {
        Ok(entity::prelude::Tool::insert(entity::tool::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category: ActiveValue::Set(category),
            pricing: ActiveValue::Set(ToolPricing::Freemium),
            usage_status: ActiveValue::Set(usage_status),
            short_description: ActiveValue::Set(format!("{} in short", name)),
            description: ActiveValue::Set(format!("{} described at length", name)),
            badges: ActiveValue::Set(serde_json::json!([])),
            url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_submission(
        &self,
        submitter_id: i32,
        name: &str,
        description: &str,
    ) -> Result<entity::tool_submission::Model, TestError> {
        Ok(entity::prelude::ToolSubmission::insert(
            entity::tool_submission::ActiveModel {
                submitter_id: ActiveValue::Set(submitter_id),
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(description.to_string()),
                category: ActiveValue::Set(ToolCategory::Productivity),
                pricing: ActiveValue::Set(ToolPricing::Free),
                url: ActiveValue::Set(None),
                status: ActiveValue::Set(SubmissionStatus::PendingReview),
                reviewer_notes: ActiveValue::Set(None),
                reviewer_id: ActiveValue::Set(None),
                approved_tool_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }
}
