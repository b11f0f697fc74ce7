use crate::server::{data::student::StudentRepository, model::student::StudentParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn params(group_id: i32) -> StudentParams {
    StudentParams {
        last_name: "Sidorov".to_string(),
        name: "Petr".to_string(),
        middle_name: None,
        email: "sidorov@uni.test".to_string(),
        phone: None,
        group_id,
    }
}

/// Tests group listing and count only include the group's students.
///
/// Expected: two students and count = 2 for the first group
#[tokio::test]
async fn lists_and_counts_students_of_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let other = factory::create_group(db).await?;
    factory::create_student(db, group.id).await?;
    factory::create_student(db, group.id).await?;
    factory::create_student(db, other.id).await?;

    let repo = StudentRepository::new(db);

    assert_eq!(repo.find_by_group(group.id).await?.len(), 2);
    assert_eq!(repo.count_by_group(group.id).await?, 2);

    Ok(())
}

/// Tests update moves the student row to another group.
///
/// Expected: Ok with the new group id stored
#[tokio::test]
async fn updates_group_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let from = factory::create_group(db).await?;
    let to = factory::create_group(db).await?;

    let repo = StudentRepository::new(db);
    let student = repo.create(params(from.id)).await?;
    let updated = repo.update(student.id, params(to.id)).await?;

    assert_eq!(updated.group_id, to.id);
    assert_eq!(repo.find_by_id(student.id).await?.unwrap().group_id, to.id);

    Ok(())
}

/// Tests a group with students cannot be deleted out from under them.
///
/// Expected: Err from the restricting foreign key
#[tokio::test]
async fn group_delete_is_restricted_by_students() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (group, _) = factory::helpers::create_student_with_group(db).await?;

    let repo = crate::server::data::group::GroupRepository::new(db);
    let result = repo.delete(group.id).await;

    assert!(result.is_err());

    Ok(())
}
