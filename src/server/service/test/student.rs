use sea_orm::DatabaseConnection;
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_student_with_group, student_group::GroupFactory},
};

use crate::server::{
    data::group::GroupRepository,
    error::{domain::DomainError, AppError},
    model::student::StudentParams,
    service::student::StudentService,
};

fn params(group_id: i32, email: &str) -> StudentParams {
    StudentParams {
        last_name: "Sidorova".to_string(),
        name: "Anna".to_string(),
        middle_name: None,
        email: email.to_string(),
        phone: None,
        group_id,
    }
}

async fn occupancy(db: &DatabaseConnection, group_id: i32) -> i32 {
    GroupRepository::new(db)
        .find_by_id(group_id)
        .await
        .unwrap()
        .unwrap()
        .current_occupancy
}

/// Tests the last free seat can be taken and the next enrollment is refused.
///
/// Group has 9 of 10 seats taken.
///
/// Expected: first create Ok with counter 10, second Err(GroupAtCapacity) with counter still 10
#[tokio::test]
async fn fills_group_then_rejects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let group = GroupFactory::new(db)
        .current_occupancy(9)
        .max_occupancy(10)
        .build()
        .await?;
    let service = StudentService::new(db);

    service.create(params(group.id, "a@uni.edu")).await?;
    assert_eq!(occupancy(db, group.id).await, 10);

    let result = service.create(params(group.id, "b@uni.edu")).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::GroupAtCapacity { .. }))
    ));
    assert_eq!(occupancy(db, group.id).await, 10);

    Ok(())
}

/// Tests a refused enrollment leaves no student row behind.
///
/// Expected: group still has no students
#[tokio::test]
async fn rejected_enrollment_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let group = GroupFactory::new(db)
        .current_occupancy(1)
        .max_occupancy(1)
        .build()
        .await?;

    let _ = StudentService::new(db)
        .create(params(group.id, "late@uni.edu"))
        .await;

    let page = StudentService::new(db).get_paginated(0, 10).await?;
    assert_eq!(page.total, 0);

    Ok(())
}

/// Tests creating a student in a missing group.
///
/// Expected: Err(ReferenceNotFound) for the group
#[tokio::test]
async fn rejects_missing_group() {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StudentService::new(db).create(params(77, "x@uni.edu")).await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::ReferenceNotFound { entity: "Group", id: 77 }))
    ));
}

/// Tests moving a student updates both counters.
///
/// Expected: source 1 -> 0, destination 0 -> 1
#[tokio::test]
async fn update_moves_seat_between_groups() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (from, student) = create_student_with_group(db).await?;
    let to = factory::create_group(db).await?;

    let updated = StudentService::new(db)
        .update(student.id, params(to.id, &student.email))
        .await?;

    assert_eq!(updated.group_id, to.id);
    assert_eq!(occupancy(db, from.id).await, 0);
    assert_eq!(occupancy(db, to.id).await, 1);

    Ok(())
}

/// Tests moving into a full group changes neither counter nor the student.
///
/// Expected: Err(GroupAtCapacity), student stays in the source group
#[tokio::test]
async fn update_into_full_group_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (from, student) = create_student_with_group(db).await?;
    let to = GroupFactory::new(db)
        .current_occupancy(2)
        .max_occupancy(2)
        .build()
        .await?;
    let service = StudentService::new(db);

    let result = service
        .update(student.id, params(to.id, &student.email))
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(DomainError::GroupAtCapacity { .. }))
    ));
    assert_eq!(occupancy(db, from.id).await, 1);
    assert_eq!(occupancy(db, to.id).await, 2);
    assert_eq!(
        service.get_by_id(student.id).await?.unwrap().group_id,
        from.id
    );

    Ok(())
}

/// Tests editing a student in a full group without moving them.
///
/// Expected: Ok, counter unchanged
#[tokio::test]
async fn update_within_full_group_keeps_seat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let group = GroupFactory::new(db).max_occupancy(1).build().await?;
    let service = StudentService::new(db);
    let student = service.create(params(group.id, "one@uni.edu")).await?;

    let mut changed = params(group.id, "one@uni.edu");
    changed.name = "Maria".to_string();
    let updated = service.update(student.id, changed).await?;

    assert_eq!(updated.name, "Maria");
    assert_eq!(occupancy(db, group.id).await, 1);

    Ok(())
}

/// Tests deleting a student frees their seat.
///
/// Expected: counter 1 -> 0
#[tokio::test]
async fn delete_releases_seat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (group, student) = create_student_with_group(db).await?;

    StudentService::new(db).delete(student.id).await?;

    assert_eq!(occupancy(db, group.id).await, 0);

    Ok(())
}
