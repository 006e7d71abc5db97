use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::SessionUserId},
};

/// Resolves the calling user from their session.
///
/// A session pointing at a user id that no longer exists in the database is
/// cleared so the client falls back to a clean login instead of looping on
/// a broken session.
pub async fn get_user_from_session(
    state: &AppState,
    session: &Session,
) -> Result<entity::user::Model, Error> {
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let user_repository = UserRepository::new(&state.db);

    let Some(user) = user_repository.get(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}
