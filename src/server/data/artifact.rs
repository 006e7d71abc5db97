use entity::artifact::ArtifactType;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct ArtifactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArtifactRepository<'a> {
    /// Creates a new instance of [`ArtifactRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, artifact_id: i32) -> Result<Option<entity::artifact::Model>, DbErr> {
        entity::prelude::Artifact::find_by_id(artifact_id)
            .one(self.db)
            .await
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<entity::artifact::Model>, DbErr> {
        entity::prelude::Artifact::find()
            .filter(entity::artifact::Column::UserId.eq(user_id))
            .order_by_desc(entity::artifact::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Counts the caller's SCHOOL and PERSONAL artifacts for the creation quota.
    pub async fn count_school_personal(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Artifact::find()
            .filter(entity::artifact::Column::UserId.eq(user_id))
            .filter(
                entity::artifact::Column::ArtifactType
                    .is_in([ArtifactType::School, ArtifactType::Personal]),
            )
            .count(self.db)
            .await
    }

    /// Counts the user's artifacts linked to a course node; any non-zero
    /// count is sufficient evidence of work done for the completion check.
    pub async fn count_linked_to_node(&self, user_id: i32, node_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Artifact::find()
            .filter(entity::artifact::Column::UserId.eq(user_id))
            .filter(entity::artifact::Column::CourseNodeId.eq(node_id))
            .count(self.db)
            .await
    }

    pub async fn get_comments(
        &self,
        artifact_id: i32,
    ) -> Result<Vec<entity::artifact_comment::Model>, DbErr> {
        entity::prelude::ArtifactComment::find()
            .filter(entity::artifact_comment::Column::ArtifactId.eq(artifact_id))
            .order_by_asc(entity::artifact_comment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    pub async fn get_reflection(
        &self,
        artifact_id: i32,
    ) -> Result<Option<entity::artifact_reflection::Model>, DbErr> {
        entity::prelude::ArtifactReflection::find()
            .filter(entity::artifact_reflection::Column::ArtifactId.eq(artifact_id))
            .one(self.db)
            .await
    }
}
