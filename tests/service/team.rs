//! Tests for TeamService: creation with generated join codes, joining by
//! code with capacity rules, and last-member cleanup on leave.

use entity::team::TeamStatus;
use praxis::server::error::{auth::AuthError, team::TeamError, Error};
use praxis::server::service::team::{TeamService, DEFAULT_MAX_MEMBERS};
use praxis::server::util::code::JOIN_CODE_LENGTH;
use praxis_test_utils::prelude::*;
use sea_orm::{EntityTrait, PaginatorTrait};

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_user_tables!(
        entity::prelude::Team,
        entity::prelude::TeamMember,
        entity::prelude::ProjectTask,
    )
}

/// Creating a team registers the creator as its first member and issues an
/// uppercase join code of the fixed length.
///
/// Expected: FORMING team, default capacity, creator membership, second
/// creation rejected
#[tokio::test]
async fn create_team_registers_creator() -> Result<(), TestError> {
    let test = setup().await?;

    let student = test.user().insert_student("s@praxis.dev").await?;

    let service = TeamService::new(&test.state.db);

    let team = service
        .create_team(&student, "Automators".to_string())
        .await
        .unwrap();

    assert_eq!(team.status, TeamStatus::Forming);
    assert_eq!(team.max_members, DEFAULT_MAX_MEMBERS);
    assert_eq!(team.creator_id, student.id);
    assert_eq!(team.join_code.len(), JOIN_CODE_LENGTH);
    assert_eq!(team.join_code, team.join_code.to_uppercase());

    let (own_team, member_count) = service.get_own_team(&student).await.unwrap();
    assert_eq!(own_team.id, team.id);
    assert_eq!(member_count, 1);

    let result = service.create_team(&student, "Second".to_string()).await;
    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::AlreadyInTeam))
    ));

    Ok(())
}

/// Join codes match case-insensitively; unknown codes are a not-found error.
///
/// Expected: lowercase input joins, bogus code fails
#[tokio::test]
async fn join_by_code_is_case_insensitive() -> Result<(), TestError> {
    let test = setup().await?;

    let creator = test.user().insert_student("c@praxis.dev").await?;
    let joiner = test.user().insert_student("j@praxis.dev").await?;
    test.team()
        .insert_team_with_creator(creator.id, "QRS234")
        .await?;

    let service = TeamService::new(&test.state.db);

    let joined = service.join_team(&joiner, " qrs234 ").await.unwrap();
    assert_eq!(joined.join_code, "QRS234");

    let stranger = test.user().insert_student("x@praxis.dev").await?;
    let result = service.join_team(&stranger, "ZZZZ99").await;
    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::CodeNotFound(_)))
    ));

    Ok(())
}

/// A full or archived team cannot be joined, and nobody can join while
/// already in a team.
///
/// Expected: TeamFull, TeamArchived, AlreadyInTeam
#[tokio::test]
async fn join_capacity_and_state_rules() -> Result<(), TestError> {
    let test = setup().await?;

    let creator = test.user().insert_student("c@praxis.dev").await?;
    let full_team = test
        .team()
        .insert_team(creator.id, "FULL22", TeamStatus::Forming, 1)
        .await?;
    test.team().insert_member(full_team.id, creator.id).await?;

    let archived_creator = test.user().insert_student("a@praxis.dev").await?;
    test.team()
        .insert_team(archived_creator.id, "GONE22", TeamStatus::Archived, 5)
        .await?;

    let joiner = test.user().insert_student("j@praxis.dev").await?;

    let service = TeamService::new(&test.state.db);

    let result = service.join_team(&joiner, "FULL22").await;
    assert!(matches!(result, Err(Error::TeamError(TeamError::TeamFull))));

    let result = service.join_team(&joiner, "GONE22").await;
    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::TeamArchived))
    ));

    let result = service.join_team(&creator, "GONE22").await;
    assert!(matches!(
        result,
        Err(Error::TeamError(TeamError::AlreadyInTeam))
    ));

    Ok(())
}

/// Leaving as a non-last member keeps the team; the last member to leave
/// deletes the team and its task board.
///
/// Expected: team survives the first leave, everything is gone after the
/// second
#[tokio::test]
async fn leave_team_last_member_cleanup() -> Result<(), TestError> {
    let test = setup().await?;

    let creator = test.user().insert_student("c@praxis.dev").await?;
    let second = test.user().insert_student("j@praxis.dev").await?;
    let team = test
        .team()
        .insert_team_with_creator(creator.id, "TWO234")
        .await?;
    test.team().insert_member(team.id, second.id).await?;

    // A task board entry that must disappear with the team.
    entity::prelude::ProjectTask::insert(entity::project_task::ActiveModel {
        team_id: sea_orm::ActiveValue::Set(team.id),
        title: sea_orm::ActiveValue::Set("Sketch the workflow".to_string()),
        description: sea_orm::ActiveValue::Set(None),
        status: sea_orm::ActiveValue::Set(entity::project_task::TaskStatus::Todo),
        order: sea_orm::ActiveValue::Set(1),
        assignee_id: sea_orm::ActiveValue::Set(None),
        created_at: sea_orm::ActiveValue::Set(chrono::Utc::now().naive_utc()),
        updated_at: sea_orm::ActiveValue::Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    })
    .exec(&test.state.db)
    .await?;

    let service = TeamService::new(&test.state.db);

    service.leave_team(&second).await.unwrap();

    assert_eq!(entity::prelude::Team::find().count(&test.state.db).await?, 1);
    assert_eq!(
        entity::prelude::TeamMember::find()
            .count(&test.state.db)
            .await?,
        1
    );

    service.leave_team(&creator).await.unwrap();

    assert_eq!(entity::prelude::Team::find().count(&test.state.db).await?, 0);
    assert_eq!(
        entity::prelude::TeamMember::find()
            .count(&test.state.db)
            .await?,
        0
    );
    assert_eq!(
        entity::prelude::ProjectTask::find()
            .count(&test.state.db)
            .await?,
        0
    );

    // Leaving again without a membership is an error.
    let result = service.leave_team(&creator).await;
    assert!(matches!(result, Err(Error::TeamError(TeamError::NotInTeam))));

    Ok(())
}

/// Team creation is a student action; reviewer roles are rejected.
///
/// Expected: RoleRequired for a mentor, zero stored teams
#[tokio::test]
async fn create_team_requires_student_role() -> Result<(), TestError> {
    let test = setup().await?;

    let mentor = test.user().insert_mentor("m@praxis.dev").await?;

    let service = TeamService::new(&test.state.db);

    let result = service.create_team(&mentor, "Mentor Squad".to_string()).await;
    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::RoleRequired(_)))
    ));

    assert_eq!(entity::prelude::Team::find().count(&test.state.db).await?, 0);

    Ok(())
}
