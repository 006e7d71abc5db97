use chrono::Utc;
use entity::team::TeamStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn team(&self) -> TeamFixtures<'_> {
        TeamFixtures { setup: self }
    }
}

pub struct TeamFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> TeamFixtures<'a> {
    pub async fn insert_team(
        &self,
        creator_id: i32,
        join_code: &str,
        status: TeamStatus,
        max_members: i32,
    ) -> Result<entity::team::Model, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            name: ActiveValue::Set("Test Team".to_string()),
            join_code: ActiveValue::Set(join_code.to_string()),
            status: ActiveValue::Set(status),
            max_members: ActiveValue::Set(max_members),
            creator_id: ActiveValue::Set(creator_id),
            mentor_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.state.db)
        .await?)
    }

    pub async fn insert_member(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<entity::team_member::Model, TestError> {
        Ok(
            entity::prelude::TeamMember::insert(entity::team_member::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                user_id: ActiveValue::Set(user_id),
                joined_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }

    /// Inserts a FORMING team with the creator already registered as a member.
    pub async fn insert_team_with_creator(
        &self,
        creator_id: i32,
        join_code: &str,
    ) -> Result<entity::team::Model, TestError> {
        let team = self
            .insert_team(creator_id, join_code, TeamStatus::Forming, 5)
            .await?;

        self.insert_member(team.id, creator_id).await?;

        Ok(team)
    }
}
