//! Curriculum progression engine.
//!
//! Maintains the per-student node unlock state machine:
//! `LOCKED -> AVAILABLE -> IN_PROGRESS -> COMPLETED`. LOCKED is the implicit
//! default for any node without a stored progress row. Completion is driven
//! externally by artifact linkage and unlocks the successor node via an
//! exact `order + 1` lookup; mentor overrides bypass the transition rules
//! entirely and never cascade.

use chrono::{NaiveDateTime, Utc};
use entity::user_node_progress::NodeStatus;
use sea_orm::{
    sea_query::OnConflict, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    data::{
        artifact::ArtifactRepository, course::CourseRepository, progress::ProgressRepository,
    },
    error::{course::CourseError, progress::ProgressError, Error},
    model::auth::require_reviewer,
};

/// A course node joined with one user's unlock state.
pub struct NodeProgress {
    pub node: entity::course_node::Model,
    pub status: NodeStatus,
    pub completed_at: Option<NaiveDateTime>,
}

pub struct ProgressionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressionService<'a> {
    /// Creates a new instance of [`ProgressionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's progress for every node of a course, bootstrapping
    /// the first node on first fetch.
    ///
    /// When the user has no progress rows for the course and the course has
    /// at least one node, a single row for the `order = 1` node is created
    /// with status AVAILABLE. The operation is idempotent: later fetches see
    /// the existing rows and skip creation, and a concurrent duplicate
    /// insert is absorbed by the unique (user_id, node_id) index.
    pub async fn get_course_progress(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Vec<NodeProgress>, Error> {
        let course_repository = CourseRepository::new(self.db);
        let progress_repository = ProgressRepository::new(self.db);

        if course_repository.get(course_id).await?.is_none() {
            return Err(CourseError::CourseNotFound(course_id).into());
        }

        let nodes = course_repository.get_nodes(course_id).await?;

        if nodes.is_empty() {
            return Ok(Vec::new());
        }

        let node_ids: Vec<i32> = nodes.iter().map(|n| n.id).collect();
        let mut rows = progress_repository
            .get_by_node_ids(user_id, node_ids.clone())
            .await?;

        if rows.is_empty() {
            // First fetch: unlock the order = 1 node. The losing side of a
            // concurrent bootstrap gets Ok(None) and refetches below.
            let first = &nodes[0];
            progress_repository
                .insert_if_missing(user_id, first.id, NodeStatus::Available)
                .await?;

            rows = progress_repository
                .get_by_node_ids(user_id, node_ids)
                .await?;
        }

        let progress = nodes
            .into_iter()
            .map(|node| {
                let row = rows.iter().find(|r| r.node_id == node.id);

                match row {
                    Some(row) => NodeProgress {
                        node,
                        status: row.status,
                        completed_at: row.completed_at,
                    },
                    None => NodeProgress {
                        node,
                        status: NodeStatus::Locked,
                        completed_at: None,
                    },
                }
            })
            .collect();

        Ok(progress)
    }

    /// Transitions a node from AVAILABLE to IN_PROGRESS for the user.
    ///
    /// Any other starting state is a domain error: a missing row or a LOCKED
    /// row means the stage is not yet unlocked, and starting an IN_PROGRESS
    /// or COMPLETED stage is invalid rather than idempotent.
    pub async fn start_stage(
        &self,
        user_id: i32,
        node_id: i32,
    ) -> Result<entity::user_node_progress::Model, Error> {
        let progress_repository = ProgressRepository::new(self.db);

        let row = progress_repository.get(user_id, node_id).await?;

        match row {
            None => Err(ProgressError::StageLocked.into()),
            Some(row) => match row.status {
                NodeStatus::Locked => Err(ProgressError::StageLocked.into()),
                NodeStatus::Available => {
                    let updated = progress_repository
                        .update_status(row, NodeStatus::InProgress, None)
                        .await?;

                    Ok(updated)
                }
                status => Err(ProgressError::StageNotStartable(status).into()),
            },
        }
    }

    /// Marks a node COMPLETED for the user if they have at least one artifact
    /// linked to it, then unlocks the successor node.
    ///
    /// The successor is the node with `order = current.order + 1` in the same
    /// course; a gap in the order sequence ends the chain. An existing row
    /// for the successor is left untouched, never downgraded or re-unlocked.
    /// Returns whether a completion occurred; zero linked artifacts is a
    /// no-op returning `false`.
    pub async fn check_node_completion(
        &self,
        user_id: i32,
        node_id: i32,
    ) -> Result<bool, Error> {
        let course_repository = CourseRepository::new(self.db);
        let artifact_repository = ArtifactRepository::new(self.db);

        let node = course_repository
            .get_node(node_id)
            .await?
            .ok_or(ProgressError::NodeNotFound(node_id))?;

        let linked = artifact_repository
            .count_linked_to_node(user_id, node_id)
            .await?;

        if linked == 0 {
            return Ok(false);
        }

        // Complete + unlock are atomic: a failure unlocking the successor
        // must not leave the node completed without its follow-up.
        let txn = self.db.begin().await?;
        let now = Utc::now().naive_utc();

        let existing = entity::prelude::UserNodeProgress::find()
            .filter(entity::user_node_progress::Column::UserId.eq(user_id))
            .filter(entity::user_node_progress::Column::NodeId.eq(node_id))
            .one(&txn)
            .await?;

        match existing {
            // Already completed: keep the original timestamp.
            Some(row) if row.status == NodeStatus::Completed => {}
            Some(row) => {
                let mut active: entity::user_node_progress::ActiveModel = row.into();
                active.status = ActiveValue::Set(NodeStatus::Completed);
                active.completed_at = ActiveValue::Set(Some(now));
                active.updated_at = ActiveValue::Set(now);
                active.update(&txn).await?;
            }
            None => {
                insert_progress_if_missing(&txn, user_id, node_id, NodeStatus::Completed, Some(now))
                    .await?;
            }
        }

        let successor = entity::prelude::CourseNode::find()
            .filter(entity::course_node::Column::CourseId.eq(node.course_id))
            .filter(entity::course_node::Column::Order.eq(node.order + 1))
            .one(&txn)
            .await?;

        if let Some(successor) = successor {
            let has_row = entity::prelude::UserNodeProgress::find()
                .filter(entity::user_node_progress::Column::UserId.eq(user_id))
                .filter(entity::user_node_progress::Column::NodeId.eq(successor.id))
                .one(&txn)
                .await?
                .is_some();

            if !has_row {
                insert_progress_if_missing(
                    &txn,
                    user_id,
                    successor.id,
                    NodeStatus::Available,
                    None,
                )
                .await?;
            }
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Mentor override: sets a (user, node) status directly, bypassing the
    /// normal transition rules. No cascading unlock side effects.
    pub async fn override_node_status(
        &self,
        caller: &entity::user::Model,
        user_id: i32,
        node_id: i32,
        status: NodeStatus,
    ) -> Result<entity::user_node_progress::Model, Error> {
        require_reviewer(caller)?;

        let course_repository = CourseRepository::new(self.db);
        let progress_repository = ProgressRepository::new(self.db);

        if course_repository.get_node(node_id).await?.is_none() {
            return Err(ProgressError::NodeNotFound(node_id).into());
        }

        let completed_at = match status {
            NodeStatus::Completed => Some(Utc::now().naive_utc()),
            _ => None,
        };

        match progress_repository.get(user_id, node_id).await? {
            Some(row) => {
                let updated = progress_repository
                    .update_status(row, status, completed_at)
                    .await?;

                Ok(updated)
            }
            None => {
                insert_progress_if_missing(self.db, user_id, node_id, status, completed_at)
                    .await?;

                progress_repository
                    .get(user_id, node_id)
                    .await?
                    .ok_or_else(|| {
                        Error::DbErr(DbErr::RecordNotFound(format!(
                            "Progress row missing after override for user {} node {}",
                            user_id, node_id
                        )))
                    })
            }
        }
    }
}

/// Inserts a progress row, treating a lost race against the unique
/// (user_id, node_id) index as success.
async fn insert_progress_if_missing<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
    node_id: i32,
    status: NodeStatus,
    completed_at: Option<NaiveDateTime>,
) -> Result<(), DbErr> {
    let now = Utc::now().naive_utc();

    let row = entity::user_node_progress::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        node_id: ActiveValue::Set(node_id),
        status: ActiveValue::Set(status),
        completed_at: ActiveValue::Set(completed_at),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    };

    let result = entity::prelude::UserNodeProgress::insert(row)
        .on_conflict(
            OnConflict::columns([
                entity::user_node_progress::Column::UserId,
                entity::user_node_progress::Column::NodeId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec(conn)
        .await;

    match result {
        Ok(_) | Err(DbErr::RecordNotInserted) => Ok(()),
        Err(err) => Err(err),
    }
}
