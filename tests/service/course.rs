//! Tests for CourseService: the admin import validation rules.

use praxis::model::course::{ImportCourseDto, ImportCourseNodeDto};
use praxis::server::error::{auth::AuthError, course::CourseError, Error};
use praxis::server::service::course::CourseService;
use praxis_test_utils::prelude::*;

async fn setup() -> Result<TestSetup, TestError> {
    test_setup_with_user_tables!(entity::prelude::Course, entity::prelude::CourseNode)
}

fn node(order: i32) -> ImportCourseNodeDto {
    ImportCourseNodeDto {
        title: format!("Stage {}", order),
        description: String::new(),
        week_range: "Weeks 1-2".to_string(),
        node_type: "PROJECT".to_string(),
        order,
        required_actions: None,
    }
}

fn import(nodes: Vec<ImportCourseNodeDto>) -> ImportCourseDto {
    ImportCourseDto {
        title: "AI Automation".to_string(),
        description: "Cohort curriculum".to_string(),
        nodes,
    }
}

/// Import writes the course and all nodes; orders may arrive unsorted as
/// long as they form a dense sequence starting at 1.
///
/// Expected: course created with 3 ordered nodes
#[tokio::test]
async fn import_accepts_dense_unsorted_orders() -> Result<(), TestError> {
    let test = setup().await?;

    let admin = test.user().insert_admin("a@praxis.dev").await?;

    let service = CourseService::new(&test.state.db);

    let course = service
        .import_course(&admin, import(vec![node(3), node(1), node(2)]))
        .await
        .unwrap();

    let (_, nodes) = service.get_course(course.id).await.unwrap();

    assert_eq!(nodes.len(), 3);
    assert_eq!(
        nodes.iter().map(|n| n.order).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    Ok(())
}

/// A gap or wrong starting point in the order sequence fails the import
/// before anything is written.
///
/// Expected: NodeOrderNotDense, no course rows
#[tokio::test]
async fn import_rejects_gapped_orders() -> Result<(), TestError> {
    let test = setup().await?;

    let admin = test.user().insert_admin("a@praxis.dev").await?;

    let service = CourseService::new(&test.state.db);

    let result = service
        .import_course(&admin, import(vec![node(1), node(3)]))
        .await;
    assert!(matches!(
        result,
        Err(Error::CourseError(CourseError::NodeOrderNotDense {
            expected: 2,
            found: 3
        }))
    ));

    let result = service
        .import_course(&admin, import(vec![node(2), node(3)]))
        .await;
    assert!(matches!(
        result,
        Err(Error::CourseError(CourseError::NodeOrderNotDense {
            expected: 1,
            found: 2
        }))
    ));

    let courses = service.list_courses().await.unwrap();
    assert!(courses.is_empty());

    Ok(())
}

/// A course without nodes is rejected, and only admins may import.
///
/// Expected: NoNodes for an empty list, RoleRequired for a mentor
#[tokio::test]
async fn import_requires_nodes_and_admin() -> Result<(), TestError> {
    let test = setup().await?;

    let admin = test.user().insert_admin("a@praxis.dev").await?;
    let mentor = test.user().insert_mentor("m@praxis.dev").await?;

    let service = CourseService::new(&test.state.db);

    let result = service.import_course(&admin, import(Vec::new())).await;
    assert!(matches!(
        result,
        Err(Error::CourseError(CourseError::NoNodes))
    ));

    let result = service.import_course(&mentor, import(vec![node(1)])).await;
    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::RoleRequired(_)))
    ));

    Ok(())
}
