//! Artifact lifecycle: creation under quota, solution plans, mentor review,
//! reflections, and deletion with full cleanup of dependent rows.

use chrono::Utc;
use entity::artifact::{ArtifactStatus, ArtifactType};
use entity::user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};

use crate::server::{
    data::{artifact::ArtifactRepository, team::TeamRepository},
    error::{artifact::ArtifactError, Error},
    model::auth::{require_owner, require_reviewer, require_role},
    service::progression::ProgressionService,
};
use crate::model::artifact::{
    CreateArtifactDto, ReviewArtifactDto, UpdateReflectionDto,
};

/// Per-user cap on SCHOOL plus PERSONAL artifacts. TEAM artifacts are
/// exempt.
pub const MAX_SCHOOL_PERSONAL_ARTIFACTS: u64 = 5;

pub struct ArtifactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtifactService<'a> {
    /// Creates a new instance of [`ArtifactService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches one artifact, visible to its owner and to reviewers.
    pub async fn get_artifact(
        &self,
        caller: &entity::user::Model,
        artifact_id: i32,
    ) -> Result<entity::artifact::Model, Error> {
        let artifact_repository = ArtifactRepository::new(self.db);

        let artifact = artifact_repository
            .get(artifact_id)
            .await?
            .ok_or(ArtifactError::NotFound(artifact_id))?;

        if artifact.user_id != caller.id {
            require_reviewer(caller)?;
        }

        Ok(artifact)
    }

    pub async fn list_own_artifacts(
        &self,
        caller: &entity::user::Model,
    ) -> Result<Vec<entity::artifact::Model>, Error> {
        let artifact_repository = ArtifactRepository::new(self.db);

        Ok(artifact_repository.get_for_user(caller.id).await?)
    }

    /// Lists an artifact's comments in posting order, under the same
    /// visibility rule as the artifact itself.
    pub async fn get_comments(
        &self,
        caller: &entity::user::Model,
        artifact_id: i32,
    ) -> Result<Vec<entity::artifact_comment::Model>, Error> {
        let artifact = self.get_artifact(caller, artifact_id).await?;

        let artifact_repository = ArtifactRepository::new(self.db);

        Ok(artifact_repository.get_comments(artifact.id).await?)
    }

    /// Creates a DRAFT artifact for the caller. Students only.
    ///
    /// SCHOOL and PERSONAL artifacts count against a shared quota of
    /// [`MAX_SCHOOL_PERSONAL_ARTIFACTS`]; TEAM artifacts are exempt but
    /// require team membership, and are linked to the caller's team. Tool
    /// links are written in the same transaction as the artifact. When the
    /// artifact is linked to a course node, the completion check runs after
    /// the commit, so the fresh artifact already counts.
    pub async fn create_artifact(
        &self,
        caller: &entity::user::Model,
        create: CreateArtifactDto,
    ) -> Result<entity::artifact::Model, Error> {
        require_role(caller, UserRole::Student)?;

        let artifact_repository = ArtifactRepository::new(self.db);
        let team_repository = TeamRepository::new(self.db);

        let team_id = match create.artifact_type {
            ArtifactType::School | ArtifactType::Personal => {
                let existing = artifact_repository.count_school_personal(caller.id).await?;

                if existing >= MAX_SCHOOL_PERSONAL_ARTIFACTS {
                    return Err(ArtifactError::QuotaExceeded(existing).into());
                }

                None
            }
            ArtifactType::Team => {
                let membership = team_repository
                    .get_membership(caller.id)
                    .await?
                    .ok_or(ArtifactError::TeamRequired)?;

                Some(membership.team_id)
            }
        };

        let txn = self.db.begin().await?;
        let now = Utc::now().naive_utc();

        let artifact = entity::artifact::ActiveModel {
            user_id: ActiveValue::Set(caller.id),
            team_id: ActiveValue::Set(team_id),
            course_node_id: ActiveValue::Set(create.course_node_id),
            title: ActiveValue::Set(create.title),
            problem: ActiveValue::Set(create.problem),
            goal: ActiveValue::Set(create.goal),
            artifact_type: ActiveValue::Set(create.artifact_type),
            status: ActiveValue::Set(ArtifactStatus::Draft),
            solution_plan: ActiveValue::Set(None),
            content: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        let artifact = artifact.insert(&txn).await?;

        for tool_id in create.tool_ids {
            let link = entity::artifact_tool::ActiveModel {
                artifact_id: ActiveValue::Set(artifact.id),
                tool_id: ActiveValue::Set(tool_id),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            };
            link.insert(&txn).await?;
        }

        txn.commit().await?;

        if let Some(node_id) = artifact.course_node_id {
            let progression_service = ProgressionService::new(self.db);
            progression_service
                .check_node_completion(caller.id, node_id)
                .await?;
        }

        Ok(artifact)
    }

    /// Attaches the solution plan and moves the artifact to SUBMITTED.
    /// Owner only; resubmitting overwrites the previous plan.
    pub async fn submit_solution_plan(
        &self,
        caller: &entity::user::Model,
        artifact_id: i32,
        solution_plan: String,
    ) -> Result<entity::artifact::Model, Error> {
        let artifact_repository = ArtifactRepository::new(self.db);

        let artifact = artifact_repository
            .get(artifact_id)
            .await?
            .ok_or(ArtifactError::NotFound(artifact_id))?;

        require_owner(caller, artifact.user_id)?;

        let mut row: entity::artifact::ActiveModel = artifact.into();
        row.solution_plan = ActiveValue::Set(Some(solution_plan));
        row.status = ActiveValue::Set(ArtifactStatus::Submitted);
        row.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(row.update(self.db).await?)
    }

    /// Mentor review: sets the artifact status and records the feedback as a
    /// comment by the reviewer.
    ///
    /// Moving to NEEDS_IMPROVEMENT through this entry point requires
    /// non-empty feedback; other target statuses accept the feedback as
    /// optional.
    pub async fn review_artifact(
        &self,
        caller: &entity::user::Model,
        artifact_id: i32,
        review: ReviewArtifactDto,
    ) -> Result<entity::artifact::Model, Error> {
        require_reviewer(caller)?;

        let artifact_repository = ArtifactRepository::new(self.db);

        let artifact = artifact_repository
            .get(artifact_id)
            .await?
            .ok_or(ArtifactError::NotFound(artifact_id))?;

        let feedback = review
            .feedback
            .filter(|text| !text.trim().is_empty());

        if review.status == ArtifactStatus::NeedsImprovement && feedback.is_none() {
            return Err(ArtifactError::FeedbackRequired.into());
        }

        let txn = self.db.begin().await?;
        let now = Utc::now().naive_utc();

        let mut row: entity::artifact::ActiveModel = artifact.into();
        row.status = ActiveValue::Set(review.status);
        row.updated_at = ActiveValue::Set(now);
        let artifact = row.update(&txn).await?;

        if let Some(feedback) = feedback {
            let comment = entity::artifact_comment::ActiveModel {
                artifact_id: ActiveValue::Set(artifact.id),
                author_id: ActiveValue::Set(caller.id),
                content: ActiveValue::Set(feedback),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            };
            comment.insert(&txn).await?;
        }

        txn.commit().await?;

        Ok(artifact)
    }

    /// Bare status update for reviewers. Unlike [`Self::review_artifact`]
    /// this path never requires feedback, including for NEEDS_IMPROVEMENT.
    pub async fn update_status(
        &self,
        caller: &entity::user::Model,
        artifact_id: i32,
        status: ArtifactStatus,
    ) -> Result<entity::artifact::Model, Error> {
        require_reviewer(caller)?;

        let artifact_repository = ArtifactRepository::new(self.db);

        let artifact = artifact_repository
            .get(artifact_id)
            .await?
            .ok_or(ArtifactError::NotFound(artifact_id))?;

        let mut row: entity::artifact::ActiveModel = artifact.into();
        row.status = ActiveValue::Set(status);
        row.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(row.update(self.db).await?)
    }

    /// Deletes an artifact together with its tool links, comments, and
    /// reflection in one transaction. Owner only.
    pub async fn delete_artifact(
        &self,
        caller: &entity::user::Model,
        artifact_id: i32,
    ) -> Result<(), Error> {
        let artifact_repository = ArtifactRepository::new(self.db);

        let artifact = artifact_repository
            .get(artifact_id)
            .await?
            .ok_or(ArtifactError::NotFound(artifact_id))?;

        require_owner(caller, artifact.user_id)?;

        let txn = self.db.begin().await?;

        entity::prelude::ArtifactTool::delete_many()
            .filter(entity::artifact_tool::Column::ArtifactId.eq(artifact.id))
            .exec(&txn)
            .await?;
        entity::prelude::ArtifactComment::delete_many()
            .filter(entity::artifact_comment::Column::ArtifactId.eq(artifact.id))
            .exec(&txn)
            .await?;
        entity::prelude::ArtifactReflection::delete_many()
            .filter(entity::artifact_reflection::Column::ArtifactId.eq(artifact.id))
            .exec(&txn)
            .await?;
        entity::prelude::Artifact::delete_by_id(artifact.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(())
    }

    /// Creates or updates the artifact's reflection. Any content change by
    /// the owner resets mentor validation.
    pub async fn update_reflection(
        &self,
        caller: &entity::user::Model,
        artifact_id: i32,
        update: UpdateReflectionDto,
    ) -> Result<entity::artifact_reflection::Model, Error> {
        let artifact_repository = ArtifactRepository::new(self.db);

        let artifact = artifact_repository
            .get(artifact_id)
            .await?
            .ok_or(ArtifactError::NotFound(artifact_id))?;

        require_owner(caller, artifact.user_id)?;

        let now = Utc::now().naive_utc();

        match artifact_repository.get_reflection(artifact.id).await? {
            Some(reflection) => {
                let mut row: entity::artifact_reflection::ActiveModel = reflection.into();
                row.time_saved_hours = ActiveValue::Set(update.time_saved_hours);
                row.simplification = ActiveValue::Set(update.simplification);
                row.validated_by_mentor = ActiveValue::Set(false);
                row.updated_at = ActiveValue::Set(now);

                Ok(row.update(self.db).await?)
            }
            None => {
                let reflection = entity::artifact_reflection::ActiveModel {
                    artifact_id: ActiveValue::Set(artifact.id),
                    time_saved_hours: ActiveValue::Set(update.time_saved_hours),
                    simplification: ActiveValue::Set(update.simplification),
                    validated_by_mentor: ActiveValue::Set(false),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                };

                Ok(reflection.insert(self.db).await?)
            }
        }
    }

    /// Marks the artifact's reflection as mentor-validated.
    pub async fn validate_reflection(
        &self,
        caller: &entity::user::Model,
        artifact_id: i32,
    ) -> Result<entity::artifact_reflection::Model, Error> {
        require_reviewer(caller)?;

        let artifact_repository = ArtifactRepository::new(self.db);

        let artifact = artifact_repository
            .get(artifact_id)
            .await?
            .ok_or(ArtifactError::NotFound(artifact_id))?;

        let reflection = artifact_repository
            .get_reflection(artifact.id)
            .await?
            .ok_or(ArtifactError::NotFound(artifact_id))?;

        let mut row: entity::artifact_reflection::ActiveModel = reflection.into();
        row.validated_by_mentor = ActiveValue::Set(true);
        row.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(row.update(self.db).await?)
    }
}
