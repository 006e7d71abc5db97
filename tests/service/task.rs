//! Tests for TaskService: append ordering per column, default move
//! positions, assignee membership checks, and team gating.

use entity::project_task::TaskStatus;
use praxis::model::task::{CreateTaskDto, MoveTaskDto, UpdateTaskDto};
use praxis::server::error::{team::TeamError, Error};
use praxis::server::service::task::TaskService;
use praxis_test_utils::prelude::*;

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_user_tables!(
        entity::prelude::Team,
        entity::prelude::TeamMember,
        entity::prelude::ProjectTask,
    )
}

fn create_dto(title: &str, status: Option<TaskStatus>) -> CreateTaskDto {
    CreateTaskDto {
        title: title.to_string(),
        description: None,
        status,
        assignee_id: None,
    }
}

/// New tasks append to their own column; each column counts independently.
///
/// Expected: orders 1, 2 in TODO and 1 in DONE
#[tokio::test]
async fn create_appends_per_column() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    test.team()
        .insert_team_with_creator(student.id, "ABC234")
        .await?;

    let service = TaskService::new(&test.state.db);

    let first = service
        .create_task(&student, create_dto("a", None))
        .await
        .unwrap();
    let second = service
        .create_task(&student, create_dto("b", None))
        .await
        .unwrap();
    let done = service
        .create_task(&student, create_dto("c", Some(TaskStatus::Done)))
        .await
        .unwrap();

    assert_eq!((first.status, first.order), (TaskStatus::Todo, 1));
    assert_eq!((second.status, second.order), (TaskStatus::Todo, 2));
    assert_eq!((done.status, done.order), (TaskStatus::Done, 1));

    Ok(())
}

/// Moving without an explicit position lands at the end of the target
/// column; an explicit position is written as-is.
///
/// Expected: default move gets max + 1, explicit move keeps its position
#[tokio::test]
async fn move_defaults_to_end_of_column() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    test.team()
        .insert_team_with_creator(student.id, "ABC234")
        .await?;

    let service = TaskService::new(&test.state.db);

    let a = service
        .create_task(&student, create_dto("a", None))
        .await
        .unwrap();
    let b = service
        .create_task(&student, create_dto("b", Some(TaskStatus::InProgress)))
        .await
        .unwrap();

    let moved = service
        .move_task(
            &student,
            a.id,
            MoveTaskDto {
                status: TaskStatus::InProgress,
                order: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(moved.status, TaskStatus::InProgress);
    assert_eq!(moved.order, b.order + 1);

    let pinned = service
        .move_task(
            &student,
            moved.id,
            MoveTaskDto {
                status: TaskStatus::Done,
                order: Some(7),
            },
        )
        .await
        .unwrap();

    assert_eq!(pinned.status, TaskStatus::Done);
    assert_eq!(pinned.order, 7);

    Ok(())
}

/// Assignees must belong to the team; clearing the assignee always works.
///
/// Expected: outsider rejected, member accepted, None clears
#[tokio::test]
async fn assignee_must_be_member() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;
    let outsider = test.user().insert_student("o@praxis.dev").await?;
    test.team()
        .insert_team_with_creator(student.id, "ABC234")
        .await?;

    let service = TaskService::new(&test.state.db);

    let task = service
        .create_task(&student, create_dto("a", None))
        .await
        .unwrap();

    let result = service.assign_task(&student, task.id, Some(outsider.id)).await;
    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::AssigneeNotInTeam(_)))
    ));

    let assigned = service
        .assign_task(&student, task.id, Some(student.id))
        .await
        .unwrap();
    assert_eq!(assigned.assignee_id, Some(student.id));

    let cleared = service.assign_task(&student, task.id, None).await.unwrap();
    assert_eq!(cleared.assignee_id, None);

    Ok(())
}

/// Users without a team cannot touch the board, and tasks of other teams
/// read as not found.
///
/// Expected: NotInTeam for the teamless caller, TaskNotFound across teams
#[tokio::test]
async fn board_is_gated_on_membership() -> Result<(), TestError> {
    let test = setup().await?;

    let member = test.user().insert_student("m@praxis.dev").await?;
    let loner = test.user().insert_student("l@praxis.dev").await?;
    let rival = test.user().insert_student("r@praxis.dev").await?;
    test.team()
        .insert_team_with_creator(member.id, "ABC234")
        .await?;
    test.team()
        .insert_team_with_creator(rival.id, "XYZ789")
        .await?;

    let service = TaskService::new(&test.state.db);

    let result = service.list_board(&loner).await;
    assert!(matches!(result, Err(Error::TeamError(TeamError::NotInTeam))));

    let task = service
        .create_task(&member, create_dto("a", None))
        .await
        .unwrap();

    let result = service
        .update_task(
            &rival,
            task.id,
            UpdateTaskDto {
                title: Some("hijack".to_string()),
                description: None,
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::TaskNotFound(_)))
    ));

    let result = service.delete_task(&rival, task.id).await;
    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::TaskNotFound(_)))
    ));

    Ok(())
}
