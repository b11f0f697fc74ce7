use super::*;

/// Tests update keeps the stored occupancy counter.
///
/// Expected: Ok with new name and maximum, current_occupancy unchanged
#[tokio::test]
async fn keeps_occupancy_on_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::student_group::GroupFactory::new(db)
        .current_occupancy(7)
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    let updated = repo.update(group.id, params("Renamed", 12)).await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.max_occupancy, 12);
    assert_eq!(updated.current_occupancy, 7);

    Ok(())
}

/// Tests paginated listing counts items rather than pages.
///
/// Expected: two groups on page 0 and total = 3
#[tokio::test]
async fn paginates_groups_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["C", "A", "B"] {
        factory::student_group::GroupFactory::new(db)
            .name(name)
            .build()
            .await?;
    }

    let repo = GroupRepository::new(db);
    let (groups, total) = repo.get_all_paginated(0, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        groups.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(),
        vec!["A", "B"]
    );

    Ok(())
}
