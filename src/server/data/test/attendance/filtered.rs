use super::*;

/// Tests lookup of the single record for a student in a class.
///
/// Expected: Some for the marked pair, None for an unmarked student
#[tokio::test]
async fn finds_record_by_schedule_and_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group, _, _, schedule) =
        factory::helpers::create_schedule_with_dependencies(db).await?;
    let marked = factory::create_student(db, group.id).await?;
    let unmarked = factory::create_student(db, group.id).await?;
    let statuses = factory::create_default_statuses(db).await?;
    let record = factory::create_attendance(db, schedule.id, marked.id, statuses[0].id).await?;

    let repo = AttendanceRepository::new(db);

    assert_eq!(
        repo.find_by_schedule_and_student(schedule.id, marked.id)
            .await?
            .map(|r| r.id),
        Some(record.id)
    );
    assert!(repo
        .find_by_schedule_and_student(schedule.id, unmarked.id)
        .await?
        .is_none());

    Ok(())
}

/// Tests the teacher filter joins through the schedule entry.
///
/// Creates two classes taught by different teachers with one record each.
///
/// Expected: only the record from the filtered teacher's class
#[tokio::test]
async fn filters_by_teacher_of_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group, course, class_type, own_class) =
        factory::helpers::create_schedule_with_dependencies(db).await?;
    let other_teacher = factory::create_teacher(db).await?;
    let other_class =
        factory::create_schedule(db, group.id, course.id, other_teacher.id, class_type.id).await?;
    let student = factory::create_student(db, group.id).await?;
    let statuses = factory::create_default_statuses(db).await?;

    let own = factory::create_attendance(db, own_class.id, student.id, statuses[0].id).await?;
    factory::create_attendance(db, other_class.id, student.id, statuses[0].id).await?;

    let repo = AttendanceRepository::new(db);
    let records = repo
        .find_all(AttendanceFilter {
            teacher_id: Some(teacher.id),
            ..Default::default()
        })
        .await?;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, own.id);

    Ok(())
}

/// Tests status and student filters combine.
///
/// Expected: only the record matching both filters, total = 1
#[tokio::test]
async fn combines_status_and_student_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, group, _, _, schedule) =
        factory::helpers::create_schedule_with_dependencies(db).await?;
    let first = factory::create_student(db, group.id).await?;
    let second = factory::create_student(db, group.id).await?;
    let statuses = factory::create_default_statuses(db).await?;
    let (present, absent) = (statuses[0].id, statuses[1].id);

    let wanted = factory::create_attendance(db, schedule.id, first.id, absent).await?;
    factory::create_attendance(db, schedule.id, second.id, absent).await?;

    let repo = AttendanceRepository::new(db);
    let (records, total) = repo
        .find_paginated(
            AttendanceFilter {
                student_id: Some(first.id),
                status_id: Some(absent),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(records[0].id, wanted.id);

    let none_present = repo
        .find_all(AttendanceFilter {
            status_id: Some(present),
            ..Default::default()
        })
        .await?;
    assert!(none_present.is_empty());

    Ok(())
}
