//! Tests for ProgressionService: first-fetch bootstrap, the stage start
//! transition matrix, the completion chain, and mentor overrides.

use entity::artifact::ArtifactType;
use entity::user_node_progress::NodeStatus;
use praxis::server::error::{auth::AuthError, progress::ProgressError, Error};
use praxis::server::service::progression::ProgressionService;
use praxis_test_utils::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_user_tables!(
        entity::prelude::Course,
        entity::prelude::CourseNode,
        entity::prelude::UserNodeProgress,
        entity::prelude::Team,
        entity::prelude::Artifact,
    )
}

/// The first progress fetch unlocks only the order = 1 node; everything else
/// reads as locked. A second fetch creates no additional rows.
///
/// Expected: node 1 AVAILABLE, nodes 2..n LOCKED, one stored row total
#[tokio::test]
async fn bootstrap_unlocks_first_node_once() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let (course, nodes) = test.course().insert_course_with_nodes("Course", 3).await?;

    let service = ProgressionService::new(&test.state.db);

    let progress = service
        .get_course_progress(student.id, course.id)
        .await
        .unwrap();

    assert_eq!(progress.len(), 3);
    assert_eq!(progress[0].node.id, nodes[0].id);
    assert_eq!(progress[0].status, NodeStatus::Available);
    assert_eq!(progress[1].status, NodeStatus::Locked);
    assert_eq!(progress[2].status, NodeStatus::Locked);

    let again = service
        .get_course_progress(student.id, course.id)
        .await
        .unwrap();

    assert_eq!(again[0].status, NodeStatus::Available);

    let stored = entity::prelude::UserNodeProgress::find()
        .filter(entity::user_node_progress::Column::UserId.eq(student.id))
        .count(&test.state.db)
        .await?;

    assert_eq!(stored, 1);

    Ok(())
}

/// Starting a stage only works from AVAILABLE.
///
/// Expected: locked stage errors, available stage moves to IN_PROGRESS,
/// restarting an in-progress stage errors
#[tokio::test]
async fn start_stage_transition_matrix() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let (course, nodes) = test.course().insert_course_with_nodes("Course", 2).await?;

    let service = ProgressionService::new(&test.state.db);

    // No progress row yet: everything is locked.
    let result = service.start_stage(student.id, nodes[0].id).await;
    assert!(matches!(
        result,
        Err(Error::ProgressError(ProgressError::StageLocked))
    ));

    service
        .get_course_progress(student.id, course.id)
        .await
        .unwrap();

    let started = service.start_stage(student.id, nodes[0].id).await.unwrap();
    assert_eq!(started.status, NodeStatus::InProgress);

    let result = service.start_stage(student.id, nodes[0].id).await;
    assert!(matches!(
        result,
        Err(Error::ProgressError(ProgressError::StageNotStartable(
            NodeStatus::InProgress
        )))
    ));

    // The second node never got a row, so it stays locked.
    let result = service.start_stage(student.id, nodes[1].id).await;
    assert!(matches!(
        result,
        Err(Error::ProgressError(ProgressError::StageLocked))
    ));

    Ok(())
}

/// Completion requires a linked artifact, marks the node COMPLETED, and
/// unlocks exactly the order + 1 successor.
///
/// Expected: false with no artifact; true afterwards with node 2 AVAILABLE
/// and node 3 still LOCKED
#[tokio::test]
async fn completion_unlocks_successor() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let (course, nodes) = test.course().insert_course_with_nodes("Course", 3).await?;

    let service = ProgressionService::new(&test.state.db);

    service
        .get_course_progress(student.id, course.id)
        .await
        .unwrap();

    // No artifact linked yet.
    let completed = service
        .check_node_completion(student.id, nodes[0].id)
        .await
        .unwrap();
    assert!(!completed);

    test.artifact()
        .insert_artifact(student.id, ArtifactType::School, Some(nodes[0].id))
        .await?;

    let completed = service
        .check_node_completion(student.id, nodes[0].id)
        .await
        .unwrap();
    assert!(completed);

    let progress = service
        .get_course_progress(student.id, course.id)
        .await
        .unwrap();

    assert_eq!(progress[0].status, NodeStatus::Completed);
    assert!(progress[0].completed_at.is_some());
    assert_eq!(progress[1].status, NodeStatus::Available);
    assert_eq!(progress[2].status, NodeStatus::Locked);

    Ok(())
}

/// Re-checking a completed node keeps its original completion timestamp and
/// never downgrades the successor.
///
/// Expected: second check returns true, statuses unchanged
#[tokio::test]
async fn completion_is_idempotent() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let (course, nodes) = test.course().insert_course_with_nodes("Course", 2).await?;

    let service = ProgressionService::new(&test.state.db);

    service
        .get_course_progress(student.id, course.id)
        .await
        .unwrap();
    test.artifact()
        .insert_artifact(student.id, ArtifactType::School, Some(nodes[0].id))
        .await?;

    assert!(service
        .check_node_completion(student.id, nodes[0].id)
        .await
        .unwrap());

    let first_pass = service
        .get_course_progress(student.id, course.id)
        .await
        .unwrap();
    let completed_at = first_pass[0].completed_at;

    assert!(service
        .check_node_completion(student.id, nodes[0].id)
        .await
        .unwrap());

    let second_pass = service
        .get_course_progress(student.id, course.id)
        .await
        .unwrap();

    assert_eq!(second_pass[0].status, NodeStatus::Completed);
    assert_eq!(second_pass[0].completed_at, completed_at);
    assert_eq!(second_pass[1].status, NodeStatus::Available);

    Ok(())
}

/// The last node of a course completes without error even though it has no
/// successor.
///
/// Expected: true, node COMPLETED, no extra rows created
#[tokio::test]
async fn completion_of_last_node_ends_chain() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let (_, nodes) = test.course().insert_course_with_nodes("Course", 1).await?;

    let service = ProgressionService::new(&test.state.db);

    test.artifact()
        .insert_artifact(student.id, ArtifactType::School, Some(nodes[0].id))
        .await?;

    let completed = service
        .check_node_completion(student.id, nodes[0].id)
        .await
        .unwrap();
    assert!(completed);

    let stored = entity::prelude::UserNodeProgress::find()
        .filter(entity::user_node_progress::Column::UserId.eq(student.id))
        .count(&test.state.db)
        .await?;

    assert_eq!(stored, 1);

    Ok(())
}

/// Mentor overrides bypass the transition rules; students cannot override.
///
/// Expected: mentor sets a locked node straight to COMPLETED, student gets a
/// role error
#[tokio::test]
async fn override_requires_reviewer_and_bypasses_transitions() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let mentor = test.user().insert_mentor("m@praxis.dev").await?;
    let (_, nodes) = test.course().insert_course_with_nodes("Course", 3).await?;

    let service = ProgressionService::new(&test.state.db);

    let result = service
        .override_node_status(&student, student.id, nodes[2].id, NodeStatus::Completed)
        .await;
    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::RoleRequired(_)))
    ));

    // Node 3 has no row at all; the override writes one directly.
    let row = service
        .override_node_status(&mentor, student.id, nodes[2].id, NodeStatus::Completed)
        .await
        .unwrap();

    assert_eq!(row.status, NodeStatus::Completed);
    assert!(row.completed_at.is_some());

    Ok(())
}
