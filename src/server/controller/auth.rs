use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{
        controller::util::get_user::get_user_from_session,
        error::Error,
        model::{app::AppState, session::SessionUserId},
        service::user::UserService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Logs in with an email address, creating a student account on first login.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(login): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.login(&login.email).await?;

    SessionUserId::set(&session, user.id).await?;

    let team_id = user_service.get_profile(&user).await?;

    Ok((
        StatusCode::OK,
        Json(UserDto {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            team_id,
        }),
    ))
}

/// Logs the caller out by clearing their session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    // Clearing a session that was never stored returns an error from the
    // store; skip the call when nobody is logged in.
    if SessionUserId::get(&session).await?.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the currently logged in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;
    let user_service = UserService::new(&state.db);

    let team_id = user_service.get_profile(&user).await?;

    Ok((
        StatusCode::OK,
        Json(UserDto {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            team_id,
        }),
    ))
}
