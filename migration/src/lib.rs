pub use sea_orm_migration::prelude::*;

mod m20260801_000001_user;
mod m20260801_000002_course;
mod m20260801_000003_course_node;
mod m20260801_000004_user_node_progress;
mod m20260801_000005_team;
mod m20260801_000006_team_member;
mod m20260801_000007_tool;
mod m20260801_000008_artifact;
mod m20260801_000009_artifact_tool;
mod m20260801_000010_artifact_comment;
mod m20260801_000011_artifact_reflection;
mod m20260801_000012_project_task;
mod m20260801_000013_tool_submission;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_user::Migration),
            Box::new(m20260801_000002_course::Migration),
            Box::new(m20260801_000003_course_node::Migration),
            Box::new(m20260801_000004_user_node_progress::Migration),
            Box::new(m20260801_000005_team::Migration),
            Box::new(m20260801_000006_team_member::Migration),
            Box::new(m20260801_000007_tool::Migration),
            Box::new(m20260801_000008_artifact::Migration),
            Box::new(m20260801_000009_artifact_tool::Migration),
            Box::new(m20260801_000010_artifact_comment::Migration),
            Box::new(m20260801_000011_artifact_reflection::Migration),
            Box::new(m20260801_000012_project_task::Migration),
            Box::new(m20260801_000013_tool_submission::Migration),
        ]
    }
}
