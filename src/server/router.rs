//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! and Swagger UI serves the interactive documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// The OpenAPI specification is served at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Praxis", description = "Praxis API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::course::COURSE_TAG, description = "Course catalog and import routes"),
        (name = controller::progress::PROGRESS_TAG, description = "Curriculum progression routes"),
        (name = controller::artifact::ARTIFACT_TAG, description = "Artifact lifecycle routes"),
        (name = controller::team::TEAM_TAG, description = "Team formation routes"),
        (name = controller::task::TASK_TAG, description = "Team task board routes"),
        (name = controller::tool::TOOL_TAG, description = "Tool catalog and submission routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::course::list_courses))
        .routes(routes!(controller::course::get_course_nodes))
        .routes(routes!(controller::course::import_course))
        .routes(routes!(controller::progress::get_course_progress))
        .routes(routes!(controller::progress::start_stage))
        .routes(routes!(controller::progress::check_node_completion))
        .routes(routes!(controller::progress::override_node_status))
        .routes(routes!(controller::artifact::list_artifacts))
        .routes(routes!(controller::artifact::create_artifact))
        .routes(routes!(controller::artifact::get_artifact))
        .routes(routes!(controller::artifact::list_artifact_comments))
        .routes(routes!(controller::artifact::delete_artifact))
        .routes(routes!(controller::artifact::submit_solution_plan))
        .routes(routes!(controller::artifact::review_artifact))
        .routes(routes!(controller::artifact::update_artifact_status))
        .routes(routes!(controller::artifact::update_reflection))
        .routes(routes!(controller::artifact::validate_reflection))
        .routes(routes!(controller::team::get_own_team))
        .routes(routes!(controller::team::create_team))
        .routes(routes!(controller::team::join_team))
        .routes(routes!(controller::team::leave_team))
        .routes(routes!(controller::task::get_task_board))
        .routes(routes!(controller::task::create_task))
        .routes(routes!(controller::task::update_task))
        .routes(routes!(controller::task::move_task))
        .routes(routes!(controller::task::assign_task))
        .routes(routes!(controller::task::delete_task))
        .routes(routes!(controller::tool::search_tools))
        .routes(routes!(controller::tool::submit_tool))
        .routes(routes!(controller::tool::list_pending_submissions))
        .routes(routes!(controller::tool::review_submission))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
