use super::*;

/// Tests every display field of the attendance projection.
///
/// Expected: names of student, group, teacher, status and course plus class times
#[tokio::test]
async fn resolves_reference_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_university_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (teacher, group, course, _, schedule) =
        factory::helpers::create_schedule_with_dependencies(db).await?;
    let student = factory::student::StudentFactory::new(db, group.id)
        .last_name("Ivanova")
        .name("Anna")
        .build()
        .await?;
    let late = factory::create_status(db, "Late").await?;
    factory::create_attendance(db, schedule.id, student.id, late.id).await?;

    let repo = AttendanceRepository::new(db);
    let records = repo
        .find_all(AttendanceFilter {
            schedule_id: Some(schedule.id),
            ..Default::default()
        })
        .await?;
    let infos = repo.with_names(records).await?;

    assert_eq!(infos.len(), 1);
    let info = &infos[0];
    assert_eq!(info.student_name, "Ivanova Anna");
    assert_eq!(info.group_name, group.name);
    assert_eq!(
        info.teacher_name,
        format!("{} {}", teacher.last_name, teacher.name)
    );
    assert_eq!(info.status_name, "Late");
    assert_eq!(info.course_name, course.name);
    assert_eq!(info.start_time, schedule.start_time);
    assert_eq!(info.end_time, schedule.end_time);

    Ok(())
}
