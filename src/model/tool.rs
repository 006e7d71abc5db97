use chrono::NaiveDateTime;
use entity::tool::{ToolCategory, ToolPricing, ToolUsageStatus};
use entity::tool_submission::SubmissionStatus;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ToolDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = String)]
    pub category: ToolCategory,
    #[schema(value_type = String)]
    pub pricing: ToolPricing,
    #[schema(value_type = String)]
    pub usage_status: ToolUsageStatus,
    pub short_description: String,
    pub description: String,
    pub badges: Vec<String>,
    pub url: Option<String>,
}

/// Catalog search filters; all optional and combined with AND.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::IntoParams)]
pub struct ToolSearchDto {
    /// Case-insensitive substring matched against name and descriptions.
    pub search: Option<String>,
    pub category: Option<String>,
    pub usage_status: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SubmitToolDto {
    pub name: String,
    pub description: String,
    #[schema(value_type = String)]
    pub category: ToolCategory,
    #[schema(value_type = String)]
    pub pricing: ToolPricing,
    pub url: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ToolSubmissionDto {
    pub id: i32,
    pub submitter_id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String)]
    pub category: ToolCategory,
    #[schema(value_type = String)]
    pub pricing: ToolPricing,
    pub url: Option<String>,
    #[schema(value_type = String)]
    pub status: SubmissionStatus,
    pub reviewer_notes: Option<String>,
    pub approved_tool_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Mentor/admin decision on a pending submission.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewSubmissionDto {
    pub approve: bool,
    pub notes: Option<String>,
}

impl From<entity::tool::Model> for ToolDto {
    fn from(tool: entity::tool::Model) -> Self {
        let badges = serde_json::from_value(tool.badges).unwrap_or_default();

        Self {
            id: tool.id,
            name: tool.name,
            category: tool.category,
            pricing: tool.pricing,
            usage_status: tool.usage_status,
            short_description: tool.short_description,
            description: tool.description,
            badges,
            url: tool.url,
        }
    }
}

impl From<entity::tool_submission::Model> for ToolSubmissionDto {
    fn from(submission: entity::tool_submission::Model) -> Self {
        Self {
            id: submission.id,
            submitter_id: submission.submitter_id,
            name: submission.name,
            description: submission.description,
            category: submission.category,
            pricing: submission.pricing,
            url: submission.url,
            status: submission.status,
            reviewer_notes: submission.reviewer_notes,
            approved_tool_id: submission.approved_tool_id,
            created_at: submission.created_at,
        }
    }
}
