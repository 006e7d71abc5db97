//! Team formation: creation with a generated join code, code-based joining
//! with capacity checks, and leaving with last-member cleanup.

use chrono::Utc;
use entity::team::TeamStatus;
use entity::user::UserRole;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, SqlErr, TransactionTrait,
};

use crate::server::{
    data::team::TeamRepository,
    error::{team::TeamError, Error},
    model::auth::require_role,
    util::code::generate_join_code,
};

/// Member capacity applied to newly created teams.
pub const DEFAULT_MAX_MEMBERS: i32 = 5;

/// Attempts at drawing an unused join code before giving up. With a 32^6
/// code space collisions are vanishingly rare at realistic team counts.
const MAX_CODE_ATTEMPTS: u32 = 10;

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of [`TeamService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the caller's team and its member count.
    pub async fn get_own_team(
        &self,
        caller: &entity::user::Model,
    ) -> Result<(entity::team::Model, u64), Error> {
        let team_repository = TeamRepository::new(self.db);

        let membership = team_repository
            .get_membership(caller.id)
            .await?
            .ok_or(TeamError::NotInTeam)?;

        let team = team_repository
            .get(membership.team_id)
            .await?
            .ok_or(TeamError::TeamNotFound(membership.team_id))?;
        let member_count = team_repository.count_members(team.id).await?;

        Ok((team, member_count))
    }

    /// Creates a FORMING team with the caller as creator and first member.
    /// Students only.
    ///
    /// The join code is drawn by rejection sampling against existing codes.
    /// A concurrent creator can still claim the same code between the check
    /// and the insert; the unique column index rejects the duplicate and the
    /// loop draws a fresh code instead of surfacing the violation.
    pub async fn create_team(
        &self,
        caller: &entity::user::Model,
        name: String,
    ) -> Result<entity::team::Model, Error> {
        require_role(caller, UserRole::Student)?;

        let team_repository = TeamRepository::new(self.db);

        if team_repository.get_membership(caller.id).await?.is_some() {
            return Err(TeamError::AlreadyInTeam.into());
        }

        for _ in 0..MAX_CODE_ATTEMPTS {
            // rng is thread-local and must not live across an await.
            let candidate = {
                let mut rng = rand::rng();
                generate_join_code(&mut rng)
            };

            if team_repository.get_by_code(&candidate).await?.is_some() {
                continue;
            }

            let txn = self.db.begin().await?;
            let now = Utc::now().naive_utc();

            let team = entity::team::ActiveModel {
                name: ActiveValue::Set(name.clone()),
                join_code: ActiveValue::Set(candidate),
                status: ActiveValue::Set(TeamStatus::Forming),
                max_members: ActiveValue::Set(DEFAULT_MAX_MEMBERS),
                creator_id: ActiveValue::Set(caller.id),
                mentor_id: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            };
            let team = match team.insert(&txn).await {
                Ok(team) => team,
                Err(err) if is_unique_violation(&err) => {
                    // Lost the code to a concurrent creator; draw again.
                    txn.rollback().await?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let member = entity::team_member::ActiveModel {
                team_id: ActiveValue::Set(team.id),
                user_id: ActiveValue::Set(caller.id),
                joined_at: ActiveValue::Set(now),
                ..Default::default()
            };
            member.insert(&txn).await?;

            txn.commit().await?;

            return Ok(team);
        }

        Err(TeamError::CodeGenerationFailed(MAX_CODE_ATTEMPTS).into())
    }

    /// Joins a team by its join code, matched case-insensitively.
    ///
    /// Rejected when the caller already belongs to a team, when the team is
    /// archived, or when it is at capacity.
    pub async fn join_team(
        &self,
        caller: &entity::user::Model,
        code: &str,
    ) -> Result<entity::team::Model, Error> {
        let team_repository = TeamRepository::new(self.db);

        let code = code.trim().to_uppercase();

        let team = team_repository
            .get_by_code(&code)
            .await?
            .ok_or_else(|| TeamError::CodeNotFound(code.clone()))?;

        if team_repository.get_membership(caller.id).await?.is_some() {
            return Err(TeamError::AlreadyInTeam.into());
        }

        if team.status == TeamStatus::Archived {
            return Err(TeamError::TeamArchived.into());
        }

        let member_count = team_repository.count_members(team.id).await?;

        if member_count >= team.max_members as u64 {
            return Err(TeamError::TeamFull.into());
        }

        team_repository.add_member(team.id, caller.id).await?;

        Ok(team)
    }

    /// Removes the caller from their team.
    ///
    /// When the caller is the last member the team is deleted outright,
    /// together with its task board, rather than left behind empty.
    pub async fn leave_team(&self, caller: &entity::user::Model) -> Result<(), Error> {
        let team_repository = TeamRepository::new(self.db);

        let membership = team_repository
            .get_membership(caller.id)
            .await?
            .ok_or(TeamError::NotInTeam)?;

        let member_count = team_repository.count_members(membership.team_id).await?;

        if member_count <= 1 {
            let txn = self.db.begin().await?;

            entity::prelude::ProjectTask::delete_many()
                .filter(entity::project_task::Column::TeamId.eq(membership.team_id))
                .exec(&txn)
                .await?;
            entity::prelude::TeamMember::delete_many()
                .filter(entity::team_member::Column::TeamId.eq(membership.team_id))
                .exec(&txn)
                .await?;
            entity::prelude::Team::delete_by_id(membership.team_id)
                .exec(&txn)
                .await?;

            txn.commit().await?;
        } else {
            team_repository.remove_member(membership.id).await?;
        }

        Ok(())
    }
}

/// True when the storage layer rejected a duplicate key, which for team
/// inserts means another creator claimed the join code first.
fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
