//! Tool catalog and community submission pipeline.
//!
//! Anyone can search the published catalog; students submit new tools for
//! review.
//! Reviewers either approve a submission, which publishes a COMMUNITY tool
//! and marks the submission COMMUNITY_APPROVED, or reject it, which records
//! the reviewer's notes while leaving the submission PENDING_REVIEW so the
//! submitter can be asked to revise. There is no terminal rejected state.

use entity::tool::{ToolCategory, ToolUsageStatus};
use entity::tool_submission::SubmissionStatus;
use entity::user::UserRole;
use sea_orm::{
    ActiveEnum, ActiveModelTrait, ActiveValue, DatabaseConnection, TransactionTrait,
};

use crate::server::{
    data::tool::{ToolRepository, ToolSearchFilter, ToolSubmissionRepository},
    error::{tool::ToolError, Error},
    model::auth::{require_reviewer, require_role},
};
use crate::model::tool::{ReviewSubmissionDto, SubmitToolDto, ToolSearchDto};

/// Character budget for the catalog card blurb derived from a submission's
/// full description.
const SHORT_DESCRIPTION_CHARS: usize = 100;

pub struct ToolService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ToolService<'a> {
    /// Creates a new instance of [`ToolService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Searches the published catalog.
    ///
    /// Unrecognized category or usage status values are ignored rather than
    /// rejected, so stale links with outdated filter names still resolve.
    pub async fn search_tools(
        &self,
        search: ToolSearchDto,
    ) -> Result<Vec<entity::tool::Model>, Error> {
        let tool_repository = ToolRepository::new(self.db);

        let filter = ToolSearchFilter {
            search: search.search.filter(|text| !text.trim().is_empty()),
            category: search
                .category
                .and_then(|value| ToolCategory::try_from_value(&value).ok()),
            usage_status: search
                .usage_status
                .and_then(|value| ToolUsageStatus::try_from_value(&value).ok()),
        };

        Ok(tool_repository.search(filter).await?)
    }

    pub async fn get_tool(&self, tool_id: i32) -> Result<Option<entity::tool::Model>, Error> {
        let tool_repository = ToolRepository::new(self.db);

        Ok(tool_repository.get(tool_id).await?)
    }

    /// Files a community tool submission for review. Students only.
    pub async fn submit_tool(
        &self,
        caller: &entity::user::Model,
        submit: SubmitToolDto,
    ) -> Result<entity::tool_submission::Model, Error> {
        require_role(caller, UserRole::Student)?;

        let submission_repository = ToolSubmissionRepository::new(self.db);

        Ok(submission_repository
            .create(
                caller.id,
                submit.name,
                submit.description,
                submit.category,
                submit.pricing,
                submit.url,
            )
            .await?)
    }

    /// Lists submissions awaiting review, oldest first. Reviewers only.
    pub async fn list_pending_submissions(
        &self,
        caller: &entity::user::Model,
    ) -> Result<Vec<entity::tool_submission::Model>, Error> {
        require_reviewer(caller)?;

        let submission_repository = ToolSubmissionRepository::new(self.db);

        Ok(submission_repository.list_pending().await?)
    }

    /// Applies a reviewer's decision to a pending submission.
    ///
    /// Approval publishes a COMMUNITY catalog tool derived from the
    /// submission and marks the submission COMMUNITY_APPROVED with a link to
    /// the new tool, atomically. Rejection stores the reviewer's notes and
    /// keeps the submission PENDING_REVIEW. An approved submission cannot be
    /// re-reviewed.
    pub async fn review_submission(
        &self,
        caller: &entity::user::Model,
        submission_id: i32,
        review: ReviewSubmissionDto,
    ) -> Result<entity::tool_submission::Model, Error> {
        require_reviewer(caller)?;

        let submission_repository = ToolSubmissionRepository::new(self.db);

        let submission = submission_repository
            .get(submission_id)
            .await?
            .ok_or(ToolError::SubmissionNotFound(submission_id))?;

        if submission.status == SubmissionStatus::CommunityApproved {
            return Err(ToolError::AlreadyApproved(submission_id).into());
        }

        if !review.approve {
            let updated = submission_repository
                .record_rejection(submission, caller.id, review.notes)
                .await?;

            return Ok(updated);
        }

        let txn = self.db.begin().await?;
        let now = chrono::Utc::now().naive_utc();

        let tool = entity::tool::ActiveModel {
            name: ActiveValue::Set(submission.name.clone()),
            category: ActiveValue::Set(submission.category),
            pricing: ActiveValue::Set(submission.pricing),
            usage_status: ActiveValue::Set(ToolUsageStatus::Community),
            short_description: ActiveValue::Set(short_description(&submission.description)),
            description: ActiveValue::Set(submission.description.clone()),
            badges: ActiveValue::Set(serde_json::json!(Vec::<String>::new())),
            url: ActiveValue::Set(submission.url.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        let tool = tool.insert(&txn).await?;

        let mut row: entity::tool_submission::ActiveModel = submission.into();
        row.status = ActiveValue::Set(SubmissionStatus::CommunityApproved);
        row.reviewer_id = ActiveValue::Set(Some(caller.id));
        row.reviewer_notes = ActiveValue::Set(review.notes);
        row.approved_tool_id = ActiveValue::Set(Some(tool.id));
        row.updated_at = ActiveValue::Set(now);
        let updated = row.update(&txn).await?;

        txn.commit().await?;

        Ok(updated)
    }
}

/// Derives the catalog blurb from a full description: the first 100
/// characters followed by an ellipsis when the text is longer, the whole
/// text otherwise. Counted in characters, not bytes, so multibyte text is
/// never split mid-character.
fn short_description(description: &str) -> String {
    if description.chars().count() <= SHORT_DESCRIPTION_CHARS {
        return description.to_string();
    }

    let truncated: String = description.chars().take(SHORT_DESCRIPTION_CHARS).collect();

    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::short_description;

    #[test]
    fn test_short_description_passthrough() {
        assert_eq!(short_description("Short text"), "Short text");
    }

    #[test]
    fn test_short_description_boundary() {
        let exactly_100 = "a".repeat(100);

        assert_eq!(short_description(&exactly_100), exactly_100);
    }

    #[test]
    fn test_short_description_truncates_long_text() {
        let long = "b".repeat(250);

        let blurb = short_description(&long);

        assert_eq!(blurb.len(), 103);
        assert!(blurb.ends_with("..."));
        assert_eq!(&blurb[..100], "b".repeat(100).as_str());
    }

    #[test]
    fn test_short_description_counts_chars_not_bytes() {
        let long = "ä".repeat(150);

        let blurb = short_description(&long);

        assert_eq!(blurb.chars().count(), 103);
        assert!(blurb.ends_with("..."));
    }
}
