use chrono::Utc;
use entity::user::UserRole;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        email: &str,
        role: UserRole,
    ) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            name: ActiveValue::Set(email.split('@').next().unwrap_or(email).to_string()),
            role: ActiveValue::Set(role),
            avatar_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_student(&self, email: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(email, UserRole::Student).await
    }

    pub async fn insert_mentor(&self, email: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(email, UserRole::Mentor).await
    }

    pub async fn insert_admin(&self, email: &str) -> Result<entity::user::Model, TestError> {
        self.insert_user(email, UserRole::Admin).await
    }
}
