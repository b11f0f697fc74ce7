use super::*;

/// Tests teacher listing is chronological across dates.
///
/// Expected: entries ordered by date, then start time
#[tokio::test]
async fn lists_teacher_entries_chronologically() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group, course, class_type, first_day) =
        factory::helpers::create_schedule_with_dependencies(db).await?;

    let later_day = factory::schedule::ScheduleFactory::new(
        db,
        group.id,
        course.id,
        teacher.id,
        class_type.id,
    )
    .date(NaiveDate::from_ymd_opt(2025, 9, 3).unwrap())
    .times(time(8, 0), time(9, 0))
    .build()
    .await?;

    let repo = ScheduleRepository::new(db);
    let entries = repo.find_by_teacher(teacher.id).await?;

    assert_eq!(
        entries.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![first_day.id, later_day.id]
    );

    Ok(())
}

/// Tests paginated group listing reports total items.
///
/// Expected: one entry on page 1 of size 1, total = 2
#[tokio::test]
async fn paginates_group_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group, course, class_type, _) =
        factory::helpers::create_schedule_with_dependencies(db).await?;
    let second = factory::schedule::ScheduleFactory::new(
        db,
        group.id,
        course.id,
        teacher.id,
        class_type.id,
    )
    .times(time(11, 0), time(12, 0))
    .build()
    .await?;

    let repo = ScheduleRepository::new(db);
    let (entries, total) = repo.find_by_group_paginated(group.id, 1, 1).await?;

    assert_eq!(total, 2);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, second.id);

    Ok(())
}
