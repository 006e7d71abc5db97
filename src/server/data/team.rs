use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, team_id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    /// Join codes are stored uppercase; callers normalize before lookup.
    pub async fn get_by_code(&self, code: &str) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::JoinCode.eq(code))
            .one(self.db)
            .await
    }

    /// Returns the caller's team membership, if any. Users belong to at most
    /// one team.
    pub async fn get_membership(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::team_member::Model>, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    pub async fn is_member(&self, team_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let membership = entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .filter(entity::team_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?;

        Ok(membership.is_some())
    }

    pub async fn count_members(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::TeamMember::find()
            .filter(entity::team_member::Column::TeamId.eq(team_id))
            .count(self.db)
            .await
    }

    pub async fn add_member(
        &self,
        team_id: i32,
        user_id: i32,
    ) -> Result<entity::team_member::Model, DbErr> {
        let member = entity::team_member::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            user_id: ActiveValue::Set(user_id),
            joined_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        member.insert(self.db).await
    }

    pub async fn remove_member(&self, member_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TeamMember::delete_by_id(member_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use entity::team::TeamStatus;
    use sea_orm::{
        ActiveModelTrait, ActiveValue, ConnectionTrait, DatabaseConnection, DbBackend, DbErr,
        Schema,
    };

    use crate::server::{
        data::team::TeamRepository,
        util::test::setup::{test_setup, test_setup_create_user},
    };

    async fn setup() -> Result<(DatabaseConnection, i32, i32), DbErr> {
        let test = test_setup().await;
        let db = test.state.db.clone();
        let schema = Schema::new(DbBackend::Sqlite);

        let stmts = vec![
            schema.create_table_from_entity(entity::prelude::User),
            schema.create_table_from_entity(entity::prelude::Team),
            schema.create_table_from_entity(entity::prelude::TeamMember),
        ];

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        let user =
            test_setup_create_user(&test, "s@praxis.dev", entity::user::UserRole::Student).await?;

        let team = entity::team::ActiveModel {
            name: ActiveValue::Set("Team".to_string()),
            join_code: ActiveValue::Set("ABC234".to_string()),
            status: ActiveValue::Set(TeamStatus::Forming),
            max_members: ActiveValue::Set(5),
            creator_id: ActiveValue::Set(user.id),
            mentor_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };
        let team = team.insert(&db).await?;

        Ok((db, user.id, team.id))
    }

    #[tokio::test]
    async fn test_membership_roundtrip() -> Result<(), DbErr> {
        let (db, user_id, team_id) = setup().await?;
        let team_repository = TeamRepository::new(&db);

        assert!(team_repository.get_membership(user_id).await?.is_none());
        assert_eq!(team_repository.count_members(team_id).await?, 0);

        let member = team_repository.add_member(team_id, user_id).await?;

        assert!(team_repository.is_member(team_id, user_id).await?);
        assert_eq!(team_repository.count_members(team_id).await?, 1);

        let result = team_repository.remove_member(member.id).await?;

        assert_eq!(result.rows_affected, 1);
        assert!(!team_repository.is_member(team_id, user_id).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_by_code() -> Result<(), DbErr> {
        let (db, _, team_id) = setup().await?;
        let team_repository = TeamRepository::new(&db);

        let found = team_repository.get_by_code("ABC234").await?;

        assert_eq!(found.map(|t| t.id), Some(team_id));

        let missing = team_repository.get_by_code("ZZZZ99").await?;

        assert!(missing.is_none());

        Ok(())
    }
}
