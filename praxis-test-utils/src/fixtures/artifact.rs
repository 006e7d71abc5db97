use chrono::Utc;
use entity::artifact::{ArtifactStatus, ArtifactType};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestSetup};

impl TestSetup {
    pub fn artifact(&self) -> ArtifactFixtures<'_> {
        ArtifactFixtures { setup: self }
    }
}

pub struct ArtifactFixtures<'a> {
    setup: &'a TestSetup,
}

impl<'a> ArtifactFixtures<'a> {
    pub async fn insert_artifact(
        &self,
        user_id: i32,
        artifact_type: ArtifactType,
        course_node_id: Option<i32>,
    ) -> Result<entity::artifact::Model, TestError> {
        Ok(
            entity::prelude::Artifact::insert(entity::artifact::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                team_id: ActiveValue::Set(None),
                course_node_id: ActiveValue::Set(course_node_id),
                title: ActiveValue::Set("Test Artifact".to_string()),
                problem: ActiveValue::Set("A recurring manual chore".to_string()),
                goal: ActiveValue::Set("Automate it away".to_string()),
                artifact_type: ActiveValue::Set(artifact_type),
                status: ActiveValue::Set(ArtifactStatus::Draft),
                solution_plan: ActiveValue::Set(None),
                content: ActiveValue::Set(None),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.state.db)
            .await?,
        )
    }
}
