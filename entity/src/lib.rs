pub mod artifact;
pub mod artifact_comment;
pub mod artifact_reflection;
pub mod artifact_tool;
pub mod course;
pub mod course_node;
pub mod prelude;
pub mod project_task;
pub mod team;
pub mod team_member;
pub mod tool;
pub mod tool_submission;
pub mod user;
pub mod user_node_progress;
