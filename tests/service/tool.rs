//! Tests for ToolService: the approval pipeline including the blurb
//! truncation rule, rejection without a terminal state, and catalog search.

use entity::tool::{ToolCategory, ToolUsageStatus};
use entity::tool_submission::SubmissionStatus;
use praxis::model::tool::{ReviewSubmissionDto, SubmitToolDto, ToolSearchDto};
use praxis::server::error::{auth::AuthError, tool::ToolError, Error};
use praxis::server::service::tool::ToolService;
use praxis_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_user_tables!(
        entity::prelude::Tool,
        entity::prelude::ToolSubmission,
    )
}

/// Approval publishes a COMMUNITY tool with a truncated blurb and marks the
/// submission approved with a link to the tool.
///
/// Expected: 100-char blurb plus ellipsis, COMMUNITY usage status,
/// COMMUNITY_APPROVED submission, re-review rejected
#[tokio::test]
async fn approval_publishes_community_tool() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let mentor = test.user().insert_mentor("m@praxis.dev").await?;

    let long_description = "x".repeat(250);
    let submission = test
        .tool()
        .insert_submission(student.id, "n8n", &long_description)
        .await?;

    let service = ToolService::new(&test.state.db);

    let reviewed = service
        .review_submission(
            &mentor,
            submission.id,
            ReviewSubmissionDto {
                approve: true,
                notes: Some("Good fit for the catalog".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(reviewed.status, SubmissionStatus::CommunityApproved);
    assert_eq!(reviewed.reviewer_id, Some(mentor.id));

    let tool_id = reviewed.approved_tool_id.unwrap();
    let tool = entity::prelude::Tool::find_by_id(tool_id)
        .one(&test.state.db)
        .await?
        .unwrap();

    assert_eq!(tool.name, "n8n");
    assert_eq!(tool.usage_status, ToolUsageStatus::Community);
    assert_eq!(tool.short_description.chars().count(), 103);
    assert!(tool.short_description.ends_with("..."));
    assert_eq!(tool.description, long_description);

    let result = service
        .review_submission(
            &mentor,
            reviewed.id,
            ReviewSubmissionDto {
                approve: false,
                notes: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(Error::ToolError(ToolError::AlreadyApproved(_)))
    ));

    Ok(())
}

/// A short description is used verbatim as the blurb.
///
/// Expected: no ellipsis appended
#[tokio::test]
async fn approval_keeps_short_description_intact() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let mentor = test.user().insert_mentor("m@praxis.dev").await?;

    let submission = test
        .tool()
        .insert_submission(student.id, "Make", "Visual workflow automation")
        .await?;

    let service = ToolService::new(&test.state.db);

    let reviewed = service
        .review_submission(
            &mentor,
            submission.id,
            ReviewSubmissionDto {
                approve: true,
                notes: None,
            },
        )
        .await
        .unwrap();

    let tool = entity::prelude::Tool::find_by_id(reviewed.approved_tool_id.unwrap())
        .one(&test.state.db)
        .await?
        .unwrap();

    assert_eq!(tool.short_description, "Visual workflow automation");

    Ok(())
}

/// Rejection records the reviewer and notes but keeps the submission in the
/// pending queue; no catalog tool is created.
///
/// Expected: PENDING_REVIEW with notes, empty catalog
#[tokio::test]
async fn rejection_keeps_submission_pending() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let mentor = test.user().insert_mentor("m@praxis.dev").await?;
    let submission = test
        .tool()
        .insert_submission(student.id, "SketchyTool", "Unclear licensing")
        .await?;

    let service = ToolService::new(&test.state.db);

    let reviewed = service
        .review_submission(
            &mentor,
            submission.id,
            ReviewSubmissionDto {
                approve: false,
                notes: Some("Clarify the license first".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(reviewed.status, SubmissionStatus::PendingReview);
    assert_eq!(
        reviewed.reviewer_notes.as_deref(),
        Some("Clarify the license first")
    );
    assert!(reviewed.approved_tool_id.is_none());

    assert_eq!(
        entity::prelude::Tool::find().count(&test.state.db).await?,
        0
    );

    let pending = service.list_pending_submissions(&mentor).await.unwrap();
    assert_eq!(pending.len(), 1);

    Ok(())
}

/// Students cannot review or list the pending queue.
///
/// Expected: RoleRequired
#[tokio::test]
async fn review_queue_requires_reviewer() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let submission = test
        .tool()
        .insert_submission(student.id, "n8n", "Workflow automation")
        .await?;

    let service = ToolService::new(&test.state.db);

    let result = service.list_pending_submissions(&student).await;
    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::RoleRequired(_)))
    ));

    let result = service
        .review_submission(
            &student,
            submission.id,
            ReviewSubmissionDto {
                approve: true,
                notes: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::RoleRequired(_)))
    ));

    Ok(())
}

/// Filters parse from their string form; unknown values are ignored rather
/// than failing the search.
///
/// Expected: category filter narrows, bogus category is a no-op
#[tokio::test]
async fn search_parses_and_ignores_unknown_filters() -> Result<(), TestError> {
    let test = setup().await?;

    test.user().insert_student("s@praxis.dev").await?;
    test.tool()
        .insert_tool("Figma", ToolCategory::Design, ToolUsageStatus::Recommended)
        .await?;
    test.tool()
        .insert_tool(
            "Claude",
            ToolCategory::AiAssistant,
            ToolUsageStatus::Recommended,
        )
        .await?;

    let service = ToolService::new(&test.state.db);

    let results = service
        .search_tools(ToolSearchDto {
            category: Some("DESIGN".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Figma");

    let results = service
        .search_tools(ToolSearchDto {
            category: Some("NOT_A_CATEGORY".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(results.len(), 2);

    Ok(())
}

/// Submitting through the service lands the tool in the pending queue.
///
/// Expected: PENDING_REVIEW with the caller as submitter
#[tokio::test]
async fn submission_enters_pending_queue() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let mentor = test.user().insert_mentor("m@praxis.dev").await?;

    let service = ToolService::new(&test.state.db);

    let submission = service
        .submit_tool(
            &student,
            SubmitToolDto {
                name: "Airtable".to_string(),
                description: "Spreadsheet-database hybrid".to_string(),
                category: entity::tool::ToolCategory::Productivity,
                pricing: entity::tool::ToolPricing::Freemium,
                url: Some("https://airtable.com".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(submission.submitter_id, student.id);
    assert_eq!(submission.status, SubmissionStatus::PendingReview);

    let pending = service.list_pending_submissions(&mentor).await.unwrap();
    assert_eq!(pending.len(), 1);

    Ok(())
}

/// Filing a submission is a student action; reviewer roles are rejected.
///
/// Expected: RoleRequired for a mentor, empty pending queue
#[tokio::test]
async fn submission_requires_student_role() -> Result<(), TestError> {
    let test = setup().await?;

    let mentor = test.user().insert_mentor("m@praxis.dev").await?;

    let service = ToolService::new(&test.state.db);

    let result = service
        .submit_tool(
            &mentor,
            SubmitToolDto {
                name: "Notion".to_string(),
                description: "Docs and databases".to_string(),
                category: entity::tool::ToolCategory::Productivity,
                pricing: entity::tool::ToolPricing::Free,
                url: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::RoleRequired(_)))
    ));

    let pending = service.list_pending_submissions(&mentor).await.unwrap();
    assert!(pending.is_empty());

    Ok(())
}
