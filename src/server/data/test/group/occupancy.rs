use super::*;

/// Tests the guarded increment takes a seat while one is free.
///
/// Expected: true and the counter goes from 0 to 1
#[tokio::test]
async fn increments_below_maximum() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_group(db).await?;
    let repo = GroupRepository::new(db);

    assert!(repo.increment_occupancy(group.id).await?);

    let stored = repo.find_by_id(group.id).await?.unwrap();
    assert_eq!(stored.current_occupancy, 1);

    Ok(())
}

/// Tests the guarded increment refuses a full group.
///
/// Verifies the WHERE clause compares against max_occupancy, so the counter
/// is unchanged when current == max.
///
/// Expected: false and the counter stays at the maximum
#[tokio::test]
async fn does_not_increment_full_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::student_group::GroupFactory::new(db)
        .current_occupancy(10)
        .max_occupancy(10)
        .build()
        .await?;
    let repo = GroupRepository::new(db);

    assert!(!repo.increment_occupancy(group.id).await?);

    let stored = repo.find_by_id(group.id).await?.unwrap();
    assert_eq!(stored.current_occupancy, 10);

    Ok(())
}

/// Tests increment against a missing group.
///
/// Expected: false, no error
#[tokio::test]
async fn does_not_increment_missing_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);

    assert!(!repo.increment_occupancy(999).await?);

    Ok(())
}

/// Tests the guarded decrement never goes below zero.
///
/// Expected: true from 1 to 0, then false with the counter staying at 0
#[tokio::test]
async fn decrement_stops_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::student_group::GroupFactory::new(db)
        .current_occupancy(1)
        .build()
        .await?;
    let repo = GroupRepository::new(db);

    assert!(repo.decrement_occupancy(group.id).await?);
    assert!(!repo.decrement_occupancy(group.id).await?);

    let stored = repo.find_by_id(group.id).await?.unwrap();
    assert_eq!(stored.current_occupancy, 0);

    Ok(())
}
