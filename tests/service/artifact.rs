//! Tests for ArtifactService: the creation quota, team preconditions, the
//! review feedback rule, deletion cleanup, and reflection validation resets.

use entity::artifact::{ArtifactStatus, ArtifactType};
use entity::user_node_progress::NodeStatus;
use praxis::model::artifact::{CreateArtifactDto, ReviewArtifactDto, UpdateReflectionDto};
use praxis::server::error::{artifact::ArtifactError, auth::AuthError, Error};
use praxis::server::service::artifact::{ArtifactService, MAX_SCHOOL_PERSONAL_ARTIFACTS};
use praxis::server::service::progression::ProgressionService;
use praxis_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_user_tables!(
        entity::prelude::Course,
        entity::prelude::CourseNode,
        entity::prelude::UserNodeProgress,
        entity::prelude::Team,
        entity::prelude::TeamMember,
        entity::prelude::Tool,
        entity::prelude::Artifact,
        entity::prelude::ArtifactTool,
        entity::prelude::ArtifactComment,
        entity::prelude::ArtifactReflection,
    )
}

fn create_dto(artifact_type: ArtifactType) -> CreateArtifactDto {
    CreateArtifactDto {
        title: "Automation".to_string(),
        problem: "Manual weekly report".to_string(),
        goal: "One-click report".to_string(),
        artifact_type,
        course_node_id: None,
        tool_ids: Vec::new(),
    }
}

/// SCHOOL and PERSONAL artifacts share one quota.
///
/// Expected: the artifact at the cap is accepted, the next one is rejected,
/// and a TEAM artifact still goes through
#[tokio::test]
async fn quota_counts_school_and_personal_together() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;

    for _ in 0..MAX_SCHOOL_PERSONAL_ARTIFACTS - 1 {
        test.artifact()
            .insert_artifact(student.id, ArtifactType::School, None)
            .await?;
    }

    let service = ArtifactService::new(&test.state.db);

    // Fills the final quota slot.
    let fifth = service
        .create_artifact(&student, create_dto(ArtifactType::Personal))
        .await
        .unwrap();
    assert_eq!(fifth.status, ArtifactStatus::Draft);

    let result = service
        .create_artifact(&student, create_dto(ArtifactType::School))
        .await;
    assert!(matches!(
        result,
        Err(Error::ArtifactError(ArtifactError::QuotaExceeded(_)))
    ));

    // TEAM artifacts are exempt from the quota.
    test.team()
        .insert_team_with_creator(student.id, "ABC234")
        .await?;

    let team_artifact = service
        .create_artifact(&student, create_dto(ArtifactType::Team))
        .await
        .unwrap();
    assert!(team_artifact.team_id.is_some());

    Ok(())
}

/// A TEAM artifact cannot be created without team membership.
///
/// Expected: TeamRequired
#[tokio::test]
async fn team_artifact_requires_membership() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;

    let service = ArtifactService::new(&test.state.db);

    let result = service
        .create_artifact(&student, create_dto(ArtifactType::Team))
        .await;

    assert!(matches!(
        result,
        Err(Error::ArtifactError(ArtifactError::TeamRequired))
    ));

    Ok(())
}

/// Creating an artifact linked to a course node triggers the completion
/// check, so the node completes immediately.
///
/// Expected: node COMPLETED with the successor unlocked
#[tokio::test]
async fn node_linked_creation_triggers_completion() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let (course, nodes) = test.course().insert_course_with_nodes("Course", 2).await?;

    let service = ArtifactService::new(&test.state.db);

    let mut dto = create_dto(ArtifactType::School);
    dto.course_node_id = Some(nodes[0].id);

    service.create_artifact(&student, dto).await.unwrap();

    let progression_service = ProgressionService::new(&test.state.db);
    let progress = progression_service
        .get_course_progress(student.id, course.id)
        .await
        .unwrap();

    assert_eq!(progress[0].status, NodeStatus::Completed);
    assert_eq!(progress[1].status, NodeStatus::Available);

    Ok(())
}

/// Deleting an artifact removes its tool links, comments, and reflection in
/// the same transaction.
///
/// Expected: zero dependent rows remain
#[tokio::test]
async fn delete_cleans_up_dependents() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let mentor = test.user().insert_mentor("m@praxis.dev").await?;
    let tool = test
        .tool()
        .insert_tool(
            "Zapier",
            entity::tool::ToolCategory::Productivity,
            entity::tool::ToolUsageStatus::Recommended,
        )
        .await?;

    let service = ArtifactService::new(&test.state.db);

    let mut dto = create_dto(ArtifactType::School);
    dto.tool_ids = vec![tool.id];
    let artifact = service.create_artifact(&student, dto).await.unwrap();

    service
        .review_artifact(
            &mentor,
            artifact.id,
            ReviewArtifactDto {
                status: ArtifactStatus::NeedsImprovement,
                feedback: Some("Plan is missing a rollback step".to_string()),
            },
        )
        .await
        .unwrap();
    service
        .update_reflection(
            &student,
            artifact.id,
            UpdateReflectionDto {
                time_saved_hours: Some(2.5),
                simplification: None,
            },
        )
        .await
        .unwrap();

    service.delete_artifact(&student, artifact.id).await.unwrap();

    let db = &test.state.db;
    assert_eq!(
        entity::prelude::Artifact::find().count(db).await?,
        0
    );
    assert_eq!(
        entity::prelude::ArtifactTool::find()
            .filter(entity::artifact_tool::Column::ArtifactId.eq(artifact.id))
            .count(db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::ArtifactComment::find().count(db).await?,
        0
    );
    assert_eq!(
        entity::prelude::ArtifactReflection::find().count(db).await?,
        0
    );

    Ok(())
}

/// Only the owner may delete an artifact.
///
/// Expected: NotOwner for another student
#[tokio::test]
async fn delete_requires_ownership() -> Result<(), TestError> {
    let test = setup().await?;

    let owner = test.user().insert_student("owner@praxis.dev").await?;
    let other = test.user().insert_student("other@praxis.dev").await?;
    let artifact = test
        .artifact()
        .insert_artifact(owner.id, ArtifactType::School, None)
        .await?;

    let service = ArtifactService::new(&test.state.db);

    let result = service.delete_artifact(&other, artifact.id).await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::NotOwner))
    ));

    Ok(())
}

/// The review entry point requires feedback when requesting improvement and
/// stores the feedback as a comment; the bare status update does not.
///
/// Expected: FeedbackRequired without text, comment row with text, no
/// comment for the bare update
#[tokio::test]
async fn review_feedback_rule() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let mentor = test.user().insert_mentor("m@praxis.dev").await?;
    let artifact = test
        .artifact()
        .insert_artifact(student.id, ArtifactType::School, None)
        .await?;

    let service = ArtifactService::new(&test.state.db);

    let result = service
        .review_artifact(
            &mentor,
            artifact.id,
            ReviewArtifactDto {
                status: ArtifactStatus::NeedsImprovement,
                feedback: Some("   ".to_string()),
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(Error::ArtifactError(ArtifactError::FeedbackRequired))
    ));

    let reviewed = service
        .review_artifact(
            &mentor,
            artifact.id,
            ReviewArtifactDto {
                status: ArtifactStatus::NeedsImprovement,
                feedback: Some("Split the plan into smaller steps".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(reviewed.status, ArtifactStatus::NeedsImprovement);

    let comments = entity::prelude::ArtifactComment::find()
        .filter(entity::artifact_comment::Column::ArtifactId.eq(artifact.id))
        .count(&test.state.db)
        .await?;
    assert_eq!(comments, 1);

    // The bare status path accepts the same target without feedback.
    let updated = service
        .update_status(&mentor, artifact.id, ArtifactStatus::Validated)
        .await
        .unwrap();
    assert_eq!(updated.status, ArtifactStatus::Validated);

    Ok(())
}

/// An owner edit to a validated reflection resets the validation flag.
///
/// Expected: validated_by_mentor true after validation, false after edit
#[tokio::test]
async fn reflection_edit_resets_validation() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let mentor = test.user().insert_mentor("m@praxis.dev").await?;
    let artifact = test
        .artifact()
        .insert_artifact(student.id, ArtifactType::School, None)
        .await?;

    let service = ArtifactService::new(&test.state.db);

    service
        .update_reflection(
            &student,
            artifact.id,
            UpdateReflectionDto {
                time_saved_hours: Some(1.0),
                simplification: Some("Dropped the manual export".to_string()),
            },
        )
        .await
        .unwrap();

    let validated = service
        .validate_reflection(&mentor, artifact.id)
        .await
        .unwrap();
    assert!(validated.validated_by_mentor);

    let edited = service
        .update_reflection(
            &student,
            artifact.id,
            UpdateReflectionDto {
                time_saved_hours: Some(3.0),
                simplification: Some("Dropped the manual export".to_string()),
            },
        )
        .await
        .unwrap();
    assert!(!edited.validated_by_mentor);

    Ok(())
}

/// Artifact creation is a student action; reviewer roles are rejected before
/// any row is written.
///
/// Expected: RoleRequired for mentor and admin, zero stored artifacts
#[tokio::test]
async fn creation_requires_student_role() -> Result<(), TestError> {
    let test = setup().await?;

    let mentor = test.user().insert_mentor("m@praxis.dev").await?;
    let admin = test.user().insert_admin("a@praxis.dev").await?;

    let service = ArtifactService::new(&test.state.db);

    let result = service.create_artifact(&mentor, create_dto(ArtifactType::School)).await;
    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::RoleRequired(_)))
    ));

    let result = service.create_artifact(&admin, create_dto(ArtifactType::Personal)).await;
    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::RoleRequired(_)))
    ));

    let stored = entity::prelude::Artifact::find()
        .count(&test.state.db)
        .await?;
    assert_eq!(stored, 0);

    Ok(())
}
