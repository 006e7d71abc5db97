pub use super::artifact::Entity as Artifact;
pub use super::artifact_comment::Entity as ArtifactComment;
pub use super::artifact_reflection::Entity as ArtifactReflection;
pub use super::artifact_tool::Entity as ArtifactTool;
pub use super::course::Entity as Course;
pub use super::course_node::Entity as CourseNode;
pub use super::project_task::Entity as ProjectTask;
pub use super::team::Entity as Team;
pub use super::team_member::Entity as TeamMember;
pub use super::tool::Entity as Tool;
pub use super::tool_submission::Entity as ToolSubmission;
pub use super::user::Entity as User;
pub use super::user_node_progress::Entity as UserNodeProgress;
