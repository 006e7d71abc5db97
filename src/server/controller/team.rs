use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        team::{CreateTeamDto, JoinTeamDto, TeamDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        data::team::TeamRepository,
        error::Error,
        model::app::AppState,
        service::team::TeamService,
    },
};

pub static TEAM_TAG: &str = "team";

fn team_dto(team: entity::team::Model, member_count: u64) -> TeamDto {
    TeamDto {
        id: team.id,
        name: team.name,
        join_code: team.join_code,
        status: team.status,
        max_members: team.max_members,
        creator_id: team.creator_id,
        mentor_id: team.mentor_id,
        member_count,
        created_at: team.created_at,
    }
}

/// Returns the caller's team.
#[utoipa::path(
    get,
    path = "/api/teams/me",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Caller's team", body = TeamDto),
        (status = 400, description = "Caller is not in a team", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_team(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let team_service = TeamService::new(&state.db);

    let (team, member_count) = team_service.get_own_team(&user).await?;

    Ok((StatusCode::OK, Json(team_dto(team, member_count))))
}

/// Creates a team with the caller as its first member.
///
/// The response includes the generated join code to share with teammates.
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 409, description = "Caller already belongs to a team", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    session: Session,
    Json(create): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let team_service = TeamService::new(&state.db);

    let team = team_service.create_team(&user, create.name).await?;

    Ok((StatusCode::CREATED, Json(team_dto(team, 1))))
}

/// Joins a team by join code.
#[utoipa::path(
    post,
    path = "/api/teams/join",
    tag = TEAM_TAG,
    request_body = JoinTeamDto,
    responses(
        (status = 200, description = "Joined the team", body = TeamDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No team for that join code", body = ErrorDto),
        (status = 409, description = "Already in a team, team archived, or team full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_team(
    State(state): State<AppState>,
    session: Session,
    Json(join): Json<JoinTeamDto>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let team_service = TeamService::new(&state.db);
    let team_repository = TeamRepository::new(&state.db);

    let team = team_service.join_team(&user, &join.code).await?;
    let member_count = team_repository.count_members(team.id).await?;

    Ok((StatusCode::OK, Json(team_dto(team, member_count))))
}

/// Leaves the caller's team. The last member to leave deletes the team and
/// its task board.
#[utoipa::path(
    post,
    path = "/api/teams/leave",
    tag = TEAM_TAG,
    responses(
        (status = 204, description = "Left the team"),
        (status = 400, description = "Caller is not in a team", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_team(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let team_service = TeamService::new(&state.db);

    team_service.leave_team(&user).await?;

    Ok(StatusCode::NO_CONTENT)
}
