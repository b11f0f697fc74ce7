use super::*;

/// Tests a new group starts with an empty counter.
///
/// Expected: Ok with current_occupancy = 0 and the given maximum
#[tokio::test]
async fn creates_empty_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let group = repo.create(params("CS-101", 25)).await?;

    assert_eq!(group.name, "CS-101");
    assert_eq!(group.current_occupancy, 0);
    assert_eq!(group.max_occupancy, 25);

    Ok(())
}

/// Tests the unique constraint on group names.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    repo.create(params("CS-101", 25)).await?;
    let result = repo.create(params("CS-101", 30)).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests lookup by name.
///
/// Expected: Some for an existing name, None otherwise
#[tokio::test]
async fn finds_group_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::student_group::GroupFactory::new(db)
        .name("MA-201")
        .build()
        .await?;

    let repo = GroupRepository::new(db);

    assert_eq!(repo.find_by_name("MA-201").await?.map(|g| g.id), Some(group.id));
    assert!(repo.find_by_name("MA-202").await?.is_none());

    Ok(())
}
