use tower_sessions::Session;

use crate::server::error::Error;

static SESSION_USER_ID_KEY: &str = "praxis.user_id";

/// Accessor for the authenticated user id stored in the session.
///
/// The session is populated by the upstream identity integration; the server
/// only ever reads the resolved user id and re-checks role and ownership
/// against the database on every operation.
pub struct SessionUserId;

impl SessionUserId {
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        Ok(session.get::<i32>(SESSION_USER_ID_KEY).await?)
    }

    pub async fn set(session: &Session, user_id: i32) -> Result<(), Error> {
        session.insert(SESSION_USER_ID_KEY, user_id).await?;

        Ok(())
    }
}
