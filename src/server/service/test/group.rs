use test_utils::{
    builder::TestBuilder,
    factory::{helpers::create_student_with_group, student_group::GroupFactory},
};

use crate::server::{
    error::{domain::DomainError, AppError},
    model::group::GroupParams,
    service::group::GroupService,
};

fn params(name: &str, max_occupancy: i32) -> GroupParams {
    GroupParams {
        name: name.to_string(),
        year_created: 2025,
        max_occupancy,
    }
}

/// Tests new groups start empty.
///
/// Expected: current_occupancy 0
#[tokio::test]
async fn creates_empty_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = GroupService::new(db).create(params("CS-101", 25)).await?;

    assert_eq!(group.current_occupancy, 0);
    assert_eq!(group.max_occupancy, 25);

    Ok(())
}

/// Tests a group must have at least one seat.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_positive_maximum() {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db).create(params("CS-101", 0)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
}

/// Tests the maximum cannot drop below the enrolled count.
///
/// Group has 5 students; update asks for 4 seats.
///
/// Expected: Err(BadRequest), maximum unchanged
#[tokio::test]
async fn rejects_maximum_below_occupancy() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let group = GroupFactory::new(db)
        .current_occupancy(5)
        .max_occupancy(10)
        .build()
        .await?;
    let service = GroupService::new(db);

    let result = service.update(group.id, params(&group.name, 4)).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        service.get_by_id(group.id).await?.unwrap().max_occupancy,
        10
    );

    Ok(())
}

/// Tests the maximum can be lowered to exactly the enrolled count.
///
/// Expected: Ok with max 5 and occupancy untouched
#[tokio::test]
async fn allows_maximum_equal_to_occupancy() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let group = GroupFactory::new(db)
        .current_occupancy(5)
        .max_occupancy(10)
        .build()
        .await?;

    let updated = GroupService::new(db)
        .update(group.id, params(&group.name, 5))
        .await?;

    assert_eq!(updated.max_occupancy, 5);
    assert_eq!(updated.current_occupancy, 5);

    Ok(())
}

/// Tests a group with students cannot be deleted.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn refuses_to_delete_group_with_students() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (group, _) = create_student_with_group(db).await?;

    let result = GroupService::new(db).delete(group.id).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests listing the students of a missing group.
///
/// Expected: Err(ReferenceNotFound)
#[tokio::test]
async fn students_of_missing_group_is_not_found() {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GroupService::new(db).get_students(3).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::ReferenceNotFound { .. }))
    ));
}
