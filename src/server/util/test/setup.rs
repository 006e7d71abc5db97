use std::sync::Arc;

use chrono::Utc;
use entity::user::{self, UserRole};
use sea_orm::{ActiveModelTrait, ActiveValue, Database, DbErr};
use tower_sessions::{MemoryStore, Session};

use crate::server::model::app::AppState;

pub struct TestSetup {
    pub state: AppState,
    pub session: Session,
}

/// Returns an [`AppState`] backed by in-memory SQLite plus a fresh session,
/// used across unit tests. Tests create the tables they need from entities.
pub async fn test_setup() -> TestSetup {
    let store = Arc::new(MemoryStore::default());
    let session = Session::new(None, store, None);

    let db = Database::connect("sqlite::memory:").await.unwrap();

    TestSetup {
        state: AppState { db },
        session,
    }
}

/// Inserts a user with the given role for tests that need a caller.
pub async fn test_setup_create_user(
    test: &TestSetup,
    email: &str,
    role: UserRole,
) -> Result<user::Model, DbErr> {
    let user = user::ActiveModel {
        email: ActiveValue::Set(email.to_string()),
        name: ActiveValue::Set(email.split('@').next().unwrap_or(email).to_string()),
        role: ActiveValue::Set(role),
        avatar_url: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    user.insert(&test.state.db).await
}
