use super::*;

/// Tests lookup by teacher only returns that teacher's entries on that day.
///
/// Creates entries for the same teacher on two dates and one entry for another
/// teacher on the same date.
///
/// Expected: only the teacher's entry on the requested date
#[tokio::test]
async fn returns_teacher_entries_for_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group, course, class_type, entry) =
        factory::helpers::create_schedule_with_dependencies(db).await?;
    let other_teacher = factory::create_teacher(db).await?;

    factory::schedule::ScheduleFactory::new(db, group.id, course.id, teacher.id, class_type.id)
        .date(NaiveDate::from_ymd_opt(2025, 9, 2).unwrap())
        .build()
        .await?;
    factory::schedule::ScheduleFactory::new(
        db,
        group.id,
        course.id,
        other_teacher.id,
        class_type.id,
    )
    .times(time(11, 0), time(12, 0))
    .build()
    .await?;

    let repo = ScheduleRepository::new(db);
    let entries = repo
        .find_by_subject_on_date(ScheduleSubject::Teacher(teacher.id), entry.date)
        .await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, entry.id);

    Ok(())
}

/// Tests lookup by group returns entries from every teacher, ordered by start time.
///
/// Expected: both entries of the group, earliest first
#[tokio::test]
async fn returns_group_entries_ordered_by_start() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_schedule_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group, course, class_type, morning) =
        factory::helpers::create_schedule_with_dependencies(db).await?;
    let other_teacher = factory::create_teacher(db).await?;

    let early = factory::schedule::ScheduleFactory::new(
        db,
        group.id,
        course.id,
        other_teacher.id,
        class_type.id,
    )
    .times(time(7, 30), time(8, 30))
    .build()
    .await?;

    let repo = ScheduleRepository::new(db);
    let entries = repo
        .find_by_subject_on_date(ScheduleSubject::Group(group.id), morning.date)
        .await?;

    assert_eq!(
        entries.iter().map(|e| e.id).collect::<Vec<_>>(),
        vec![early.id, morning.id]
    );

    Ok(())
}
