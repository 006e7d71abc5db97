//! Account lookup and the development login flow.

use entity::user::UserRole;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{team::TeamRepository, user::UserRepository},
    error::Error,
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves a login email to an account, creating a STUDENT account on
    /// first sight. The display name defaults to the email's local part.
    pub async fn login(&self, email: &str) -> Result<entity::user::Model, Error> {
        let user_repository = UserRepository::new(self.db);

        let email = email.trim().to_lowercase();

        if let Some(user) = user_repository.get_by_email(&email).await? {
            return Ok(user);
        }

        let name = email
            .split('@')
            .next()
            .unwrap_or(email.as_str())
            .to_string();

        let user = user_repository
            .create(email, name, UserRole::Student)
            .await?;

        Ok(user)
    }

    /// Returns the user's profile with their team membership, if any.
    pub async fn get_profile(
        &self,
        user: &entity::user::Model,
    ) -> Result<Option<i32>, Error> {
        let team_repository = TeamRepository::new(self.db);

        let membership = team_repository.get_membership(user.id).await?;

        Ok(membership.map(|m| m.team_id))
    }
}
